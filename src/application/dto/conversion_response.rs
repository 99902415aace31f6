use crate::shared::error::WriteFailure;

/// ConversionResponse - outcome of a completed conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResponse {
    /// Number of components in the decoded document
    pub component_count: usize,
    /// Component rows that reached the output (header not counted)
    pub rows_written: usize,
    /// Records that failed, in the order they were attempted
    pub write_failures: Vec<WriteFailure>,
}

impl ConversionResponse {
    pub fn new(
        component_count: usize,
        rows_written: usize,
        write_failures: Vec<WriteFailure>,
    ) -> Self {
        Self {
            component_count,
            rows_written,
            write_failures,
        }
    }

    /// True when the header and every row were written
    pub fn is_complete(&self) -> bool {
        self.write_failures.is_empty()
    }
}
