// crates/domain/src/counter.rs
use count_words_shared_kernel::Word;

use crate::tally::WordTally;

/// Consume a token stream to completion into a fresh per-stream tally.
///
/// First occurrence of a word sets its count to 1; each further
/// occurrence adds 1. An empty stream yields an empty tally. Purely
/// sequential; each invocation owns its whole state.
pub fn tally_tokens<I>(tokens: I) -> WordTally
where
    I: IntoIterator<Item = Word>,
{
    let mut tally = WordTally::new();
    for word in tokens {
        tally.record(word);
    }
    tally
}
