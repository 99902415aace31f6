/// Record encoders for the report table
mod csv_formatter;

pub use csv_formatter::CsvFormatter;
