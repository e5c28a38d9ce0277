//! Bounded admission of concurrently running jobs

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::domain::DomainError;

/// Semaphore-backed gate admitting at most `width` holders at once
///
/// Also tracks how many permits are held and the highest count observed.
#[derive(Debug, Clone)]
pub struct ConcurrencyGate {
    semaphore: Arc<Semaphore>,
    width: usize,
    running: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl ConcurrencyGate {
    pub fn new(width: usize) -> Result<Self, DomainError> {
        if width == 0 {
            return Err(DomainError::validation(
                "concurrency width must be at least 1",
            ));
        }

        Ok(Self {
            semaphore: Arc::new(Semaphore::new(width)),
            width,
            running: Arc::new(AtomicUsize::new(0)),
            peak: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Wait for a free slot
    pub async fn acquire(&self) -> Result<GatePermit, DomainError> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| DomainError::internal(format!("Concurrency gate closed: {}", e)))?;

        let running = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);

        Ok(GatePermit {
            _permit: permit,
            running: Arc::clone(&self.running),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of permits currently held
    pub fn running(&self) -> usize {
        self.running.load(Ordering::SeqCst)
    }

    /// Highest number of permits held at the same time
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

/// Slot in a [`ConcurrencyGate`], released on drop
#[derive(Debug)]
pub struct GatePermit {
    _permit: OwnedSemaphorePermit,
    running: Arc<AtomicUsize>,
}

impl Drop for GatePermit {
    fn drop(&mut self) {
        self.running.fetch_sub(1, Ordering::SeqCst);
    }
}
