// crates/usecase/src/pipeline.rs
use std::path::Path;

use count_words_domain::{WordScanner, WordTally};
use count_words_ports::LineSource;
use count_words_shared_kernel::{ApplicationError, Result};

use crate::cancel::CancelToken;

/// Source → tokenizer → counter for a single file.
///
/// All state here is task-local; nothing is shared with sibling file
/// pipelines, so no synchronization is needed. The token is polled
/// between line reads, bounding the work done after an abort by one
/// line of input.
pub fn tally_file(source: &dyn LineSource, path: &Path, cancel: &CancelToken) -> Result<WordTally> {
    let mut tally = WordTally::new();
    for line in source.read_lines(path)? {
        if cancel.is_cancelled() {
            return Err(ApplicationError::Cancelled.into());
        }
        let line = line?;
        for word in WordScanner::new(line.chars()) {
            tally.record(word);
        }
    }
    Ok(tally)
}
