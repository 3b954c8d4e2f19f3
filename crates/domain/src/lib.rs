//! # Domain
//!
//! Pure word-counting logic with no I/O:
//!
//! - [`tokenizer`]: two-state scanner turning characters into words
//! - [`counter`]: per-stream token counting
//! - [`tally`]: the word→count map model
//! - [`aggregate`]: merging independently produced tallies
//!
//! Everything here is deterministic and single-threaded; concurrency is
//! layered on top by the use case crate.

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod aggregate;
pub mod counter;
pub mod tally;
pub mod tokenizer;

pub use aggregate::merge_tallies;
pub use counter::tally_tokens;
pub use tally::WordTally;
pub use tokenizer::{WordScanner, scan_str};
