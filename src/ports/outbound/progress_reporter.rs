/// ProgressReporter port for reporting progress during a conversion
///
/// Implementations write to stderr so that stdout is left alone.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the component list
    ///
    /// # Arguments
    /// * `current` - Rows processed so far
    /// * `total` - Total number of rows
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
