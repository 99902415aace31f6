/// Ports module defining interfaces for hexagonal architecture
///
/// The conversion core only drives outward (reading the document, encoding
/// and writing the table, reporting progress), so only outbound ports exist.
pub mod outbound;
