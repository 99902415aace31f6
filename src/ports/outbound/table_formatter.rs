use crate::shared::Result;

/// TableFormatter port for encoding one table record
///
/// Each record is encoded independently, so a failure on one row never
/// leaves partial state behind for the next.
pub trait TableFormatter {
    /// Encodes `fields` as one complete, terminated record
    ///
    /// # Errors
    /// Returns an error if the record cannot be serialized
    fn encode_record(&self, fields: &[&str]) -> Result<Vec<u8>>;
}
