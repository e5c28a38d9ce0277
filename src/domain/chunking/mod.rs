//! Size-bounded text chunking
//!
//! Documents are translated one bounded chunk at a time because the remote
//! service rejects requests over a fixed size.

pub mod config;
pub mod splitter;

pub use config::{ChunkBoundaryConfig, DEFAULT_DELIMITERS};
pub use splitter::{split, split_text, TextChunk};
