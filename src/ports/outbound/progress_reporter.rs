/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr) so the user
/// gets feedback while a lookup is pending.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Starts an indeterminate activity (a pending lookup)
    ///
    /// # Arguments
    /// * `message` - Description shown while the activity runs
    fn start_activity(&self, message: &str);

    /// Ends the activity started by [`ProgressReporter::start_activity`], if any
    fn finish_activity(&self);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn start_activity(&self, message: &str) {
        (**self).start_activity(message)
    }

    fn finish_activity(&self) {
        (**self).finish_activity()
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }
}
