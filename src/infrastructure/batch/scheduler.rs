//! Bounded-width execution of document jobs

use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::debug;

use super::gate::ConcurrencyGate;
use crate::domain::progress::ProgressSink;
use crate::domain::DomainError;

/// Runs jobs with at most `width` of them in flight at any instant
///
/// Jobs are launched in input order. Before each launch the scheduler waits
/// for a free slot, then reports one unit of progress. Results are returned in
/// completion order once every launched job has finished.
#[derive(Debug, Clone)]
pub struct ConcurrencyScheduler {
    gate: ConcurrencyGate,
}

impl ConcurrencyScheduler {
    pub fn new(width: usize) -> Result<Self, DomainError> {
        Ok(Self {
            gate: ConcurrencyGate::new(width)?,
        })
    }

    pub fn width(&self) -> usize {
        self.gate.width()
    }

    pub fn gate(&self) -> &ConcurrencyGate {
        &self.gate
    }

    /// Run `work` over every job
    ///
    /// Fails only when a job task panics or is cancelled; the error surfaces
    /// after all other jobs have settled.
    pub async fn run<J, T, F, Fut>(
        &self,
        jobs: Vec<J>,
        progress: &dyn ProgressSink,
        work: F,
    ) -> Result<Vec<T>, DomainError>
    where
        F: Fn(J) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let total = jobs.len();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = JoinSet::new();

        for (position, job) in jobs.into_iter().enumerate() {
            let permit = self.gate.acquire().await?;
            progress.report_progress(1);
            debug!(position, total, running = self.gate.running(), "Launching job");

            let task = work(job);
            let tx = tx.clone();

            tasks.spawn(async move {
                let result = task.await;
                let _ = tx.send(result);
                drop(permit);
            });
        }

        drop(tx);

        let mut failure = None;
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                if failure.is_none() {
                    failure = Some(DomainError::internal(format!("Job task failed: {}", e)));
                }
            }
        }

        if let Some(error) = failure {
            return Err(error);
        }

        let mut results = Vec::with_capacity(total);
        while let Some(result) = rx.recv().await {
            results.push(result);
        }

        Ok(results)
    }
}
