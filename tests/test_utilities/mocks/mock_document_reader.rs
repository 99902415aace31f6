use sbom_csv::prelude::*;
use std::path::Path;

/// Mock DocumentReader for testing
pub struct MockDocumentReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockDocumentReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, path: &Path) -> Result<Vec<u8>> {
        if self.should_fail {
            return Err(SbomError::InputReadError {
                path: path.to_path_buf(),
                details: "Mock document read failure".to_string(),
            }
            .into());
        }
        Ok(self.content.clone().into_bytes())
    }
}
