/// ProgressReporter port for reporting progress during operations
///
/// All diagnostics go through this port (to stderr in production) so stdout
/// stays free for callers.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);

    /// Marks the start of a step that blocks for a while (e.g. an external process)
    fn start_activity(&self, _message: &str) {}

    /// Marks the end of the step started by `start_activity`
    fn finish_activity(&self) {}
}
