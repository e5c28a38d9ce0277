//! Infrastructure layer - External service implementations and batch execution

pub mod batch;
pub mod observability;
pub mod progress;
pub mod settings;
pub mod storage;
pub mod translator;
