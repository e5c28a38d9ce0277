//! Delimiter-priority text splitting
//!
//! Text starts out as a single chunk. Each delimiter, coarsest first, is used to
//! re-split only the chunks that are still over the size ceiling. The fragments
//! produced by a split are greedily merged back left to right, so that small
//! pieces do not turn into their own requests.
//!
//! Concatenating the output in order always reproduces the input: delimiters
//! are never dropped, a chunk keeps the delimiter that followed it.

use serde::{Deserialize, Serialize};

use super::config::ChunkBoundaryConfig;

/// An ordered fragment of a document's source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// Position of this chunk in the document (0-based)
    pub index: usize,
    /// Chunk text, including the delimiter that followed it in the source
    pub content: String,
    /// Character offset where this chunk starts
    pub char_start: usize,
    /// Character offset where this chunk ends (exclusive)
    pub char_end: usize,
}

impl TextChunk {
    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.char_end - self.char_start
    }
}

/// Split `text` into indexed chunks bounded by the configured thresholds
///
/// A fragment between two consecutive delimiters of the finest configured kind
/// cannot be subdivided; if it is longer than the ceiling it is returned as is.
pub fn split(text: &str, config: &ChunkBoundaryConfig) -> Vec<TextChunk> {
    let mut offset = 0;

    split_text(text, config)
        .into_iter()
        .enumerate()
        .map(|(index, content)| {
            let char_start = offset;
            offset += content.chars().count();

            TextChunk {
                index,
                content,
                char_start,
                char_end: offset,
            }
        })
        .collect()
}

/// Split `text` into chunk strings, see [`split`]
pub fn split_text(text: &str, config: &ChunkBoundaryConfig) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let max = config.max_chunk_threshold;
    let mut chunks = vec![text.to_string()];

    for &delimiter in &config.delimiters {
        if chunks.iter().all(|c| config.measured_len(c) <= max) {
            break;
        }

        chunks = chunks
            .into_iter()
            .flat_map(|chunk| {
                if config.measured_len(&chunk) > max {
                    split_on_delimiter(&chunk, delimiter, config)
                } else {
                    vec![chunk]
                }
            })
            .collect();
    }

    chunks
}

/// Split one oversized chunk on `delimiter` and greedily reassemble the pieces
fn split_on_delimiter(chunk: &str, delimiter: char, config: &ChunkBoundaryConfig) -> Vec<String> {
    let mut tokens = chunk.split(delimiter);
    let mut result = Vec::new();

    let mut current = tokens.next().unwrap_or_default().to_string();
    let mut current_len = current.chars().count();

    for token in tokens {
        let token_len = token.chars().count();

        let wants_merge = current_len + token_len < config.min_chunk_threshold
            || token_len < config.small_chunk_threshold;

        // Flushed as `current + delimiter`, so only that last delimiter is free
        let fits = current_len + 1 + token_len <= config.max_chunk_threshold;

        if wants_merge && fits {
            current.push(delimiter);
            current.push_str(token);
            current_len += 1 + token_len;
        } else {
            current.push(delimiter);
            push_non_empty(&mut result, std::mem::take(&mut current));
            current.push_str(token);
            current_len = token_len;
        }
    }

    push_non_empty(&mut result, current);
    result
}

fn push_non_empty(result: &mut Vec<String>, chunk: String) {
    if !chunk.is_empty() {
        result.push(chunk);
    }
}
