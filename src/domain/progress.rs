//! Host progress and status reporting boundary

#[cfg(test)]
use mockall::automock;

/// Fire-and-forget status sink
///
/// Implementations must return promptly; the scheduler calls them inline.
#[cfg_attr(test, automock)]
pub trait ProgressSink: Send + Sync {
    /// Advance the host progress indicator by `increment` units
    fn report_progress(&self, increment: usize);

    /// Replace the host status label
    fn report_status(&self, label: &str);
}

/// Progress sink that discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn report_progress(&self, _increment: usize) {}

    fn report_status(&self, _label: &str) {}
}
