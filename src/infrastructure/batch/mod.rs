//! Batch execution: per-document pipeline, bounded scheduler and orchestration

mod gate;
mod orchestrator;
mod pipeline;
mod scheduler;

pub use gate::{ConcurrencyGate, GatePermit};
pub use orchestrator::{BatchOrchestrator, TRANSLATING_STATUS};
pub use pipeline::{DocumentPipeline, DEFAULT_REQUEST_CHAR_LIMIT};
pub use scheduler::ConcurrencyScheduler;
