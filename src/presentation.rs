// src/presentation.rs
use anyhow::Result;

use count_words_domain::WordTally;
use count_words_shared_kernel::{Occurrences, Word};

use crate::{args::OutputFormat, config::Config};

/// Order entries by descending count, ties broken by word ascending so
/// output is deterministic, then truncate to `top` when requested.
pub fn sorted_entries(tally: &WordTally, top: Option<usize>) -> Vec<(Word, Occurrences)> {
    let mut entries: Vec<(Word, Occurrences)> =
        tally.iter().map(|(word, count)| (word.clone(), count)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if let Some(top) = top {
        entries.truncate(top);
    }
    entries
}

/// Emit the tally on stdout in the configured format.
pub fn emit(tally: &WordTally, config: &Config) -> Result<()> {
    let entries = sorted_entries(tally, config.top);
    match config.format {
        OutputFormat::Table => {
            for (word, count) in &entries {
                println!("{word}: {count}");
            }
        }
        OutputFormat::Json => {
            let mut map = serde_json::Map::with_capacity(entries.len());
            for (word, count) in entries {
                map.insert(word.into(), serde_json::Value::from(count.value()));
            }
            println!("{}", serde_json::to_string_pretty(&serde_json::Value::Object(map))?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(entries: &[(&str, usize)]) -> WordTally {
        entries
            .iter()
            .map(|(w, c)| (Word::normalize(w).unwrap(), Occurrences::from(*c)))
            .collect()
    }

    fn rendered(entries: &[(Word, Occurrences)]) -> Vec<(String, usize)> {
        entries.iter().map(|(w, c)| (w.to_string(), c.value())).collect()
    }

    #[test]
    fn sorts_by_descending_count_then_word() {
        let entries = sorted_entries(&tally(&[("b", 2), ("a", 2), ("c", 5)]), None);
        assert_eq!(
            rendered(&entries),
            [("c".to_string(), 5), ("a".to_string(), 2), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn top_truncates_after_sorting() {
        let entries = sorted_entries(&tally(&[("a", 1), ("b", 3), ("c", 2)]), Some(2));
        assert_eq!(rendered(&entries), [("b".to_string(), 3), ("c".to_string(), 2)]);
    }
}
