use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for obtaining the raw bytes of an SBOM document
pub trait DocumentReader {
    /// Reads the whole document at `path`
    ///
    /// # Errors
    /// Returns `SbomError::InputReadError` if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_document(&self, path: &Path) -> Result<Vec<u8>>;
}
