/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, encoders).
pub mod document_reader;
pub mod progress_reporter;
pub mod table_formatter;
pub mod table_output;

pub use document_reader::DocumentReader;
pub use progress_reporter::ProgressReporter;
pub use table_formatter::TableFormatter;
pub use table_output::TableOutput;
