use sbom_csv::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory writer shared between the mock output and the test
///
/// Any single write whose bytes contain `fail_on` is rejected.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
    fail_on: Option<String>,
}

impl SharedBuffer {
    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_on: Some(marker.to_string()),
            ..Self::default()
        }
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(marker) = &self.fail_on {
            if String::from_utf8_lossy(buf).contains(marker.as_str()) {
                return Err(io::Error::other("mock write failure"));
            }
        }
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Mock TableOutput for testing; records the destinations it was asked for
#[derive(Clone, Default)]
pub struct MockTableOutput {
    pub buffer: SharedBuffer,
    pub should_fail: bool,
    pub destinations: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockTableOutput {
    pub fn new(buffer: SharedBuffer) -> Self {
        Self {
            buffer,
            ..Self::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn create_count(&self) -> usize {
        self.destinations.lock().unwrap().len()
    }
}

impl TableOutput for MockTableOutput {
    fn create(&self, destination: &Path) -> Result<Box<dyn Write>> {
        if self.should_fail {
            return Err(SbomError::OutputCreateError {
                path: destination.to_path_buf(),
                details: "Mock output create failure".to_string(),
            }
            .into());
        }
        self.destinations
            .lock()
            .unwrap()
            .push(destination.to_path_buf());
        Ok(Box::new(self.buffer.clone()))
    }
}
