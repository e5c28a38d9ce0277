//! Progress sink that reports through tracing

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use tracing::info;

use crate::domain::progress::ProgressSink;

/// Logs progress and status changes, keeping running totals
#[derive(Debug)]
pub struct TracingProgressSink {
    total: Option<usize>,
    progress: AtomicUsize,
    status: RwLock<Option<String>>,
}

impl TracingProgressSink {
    pub fn new() -> Self {
        Self {
            total: None,
            progress: AtomicUsize::new(0),
            status: RwLock::new(None),
        }
    }

    /// Expected number of progress units, included in log lines
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn progress(&self) -> usize {
        self.progress.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> Option<String> {
        self.status.read().ok().and_then(|status| status.clone())
    }
}

impl Default for TracingProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for TracingProgressSink {
    fn report_progress(&self, increment: usize) {
        let current = self.progress.fetch_add(increment, Ordering::SeqCst) + increment;

        match self.total {
            Some(total) => info!(progress = current, total, "Progress {}/{}", current, total),
            None => info!(progress = current, "Progress {}", current),
        }
    }

    fn report_status(&self, label: &str) {
        if let Ok(mut status) = self.status.write() {
            *status = Some(label.to_string());
        }

        info!(status = label, "Status changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_progress_and_status() {
        let sink = TracingProgressSink::new().with_total(3);

        sink.report_status("Translating documents");
        sink.report_progress(1);
        sink.report_progress(2);

        assert_eq!(sink.progress(), 3);
        assert_eq!(sink.status().as_deref(), Some("Translating documents"));
    }
}
