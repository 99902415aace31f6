use crate::ports::outbound::TableOutput;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// FileSystemWriter adapter creating the CSV report file
///
/// The destination is created or truncated as given, following symbolic
/// links, so `/dev/stdout` works. The returned writer is unbuffered so a
/// failed record write surfaces on that record rather than on a later flush.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableOutput for FileSystemWriter {
    fn create(&self, destination: &Path) -> Result<Box<dyn Write>> {
        let file = File::create(destination).map_err(|e| SbomError::OutputCreateError {
            path: destination.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(Box::new(file))
    }
}
