use crate::shared::Result;
use std::io::Write;
use std::path::Path;

/// TableOutput port for opening the report destination
pub trait TableOutput {
    /// Creates (or truncates) the destination and returns a writer to it
    ///
    /// # Errors
    /// Returns `SbomError::OutputCreateError` if the destination cannot be
    /// created or opened for writing
    fn create(&self, destination: &Path) -> Result<Box<dyn Write>>;
}
