use crate::ports::outbound::DocumentReader;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading SBOM documents from the file system
///
/// Paths are opened as given: symbolic links are followed and device files
/// or named pipes (e.g. `/dev/stdin`) are read until end of stream.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| {
            SbomError::InputReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
