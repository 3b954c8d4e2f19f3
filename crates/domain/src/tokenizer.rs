// crates/domain/src/tokenizer.rs
use count_words_shared_kernel::Word;

/// Scanner position: between words, or inside a run of word characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideWord,
    InsideWord,
}

/// Two-state scanner turning a character stream into normalized words.
///
/// Letters and digits accumulate into the current word; any other
/// character (whitespace and punctuation alike) terminates it and is
/// discarded. End of input flushes a pending word. Emitted words are
/// lowercased and never empty.
///
/// The scanner is lazy and forward-only: it pulls characters on demand
/// and each word is produced exactly once.
#[derive(Debug)]
pub struct WordScanner<I> {
    chars: I,
    state: ScanState,
    buf: String,
}

impl<I> WordScanner<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(chars: I) -> Self {
        Self { chars, state: ScanState::OutsideWord, buf: String::new() }
    }

    fn flush(&mut self) -> Option<Word> {
        self.state = ScanState::OutsideWord;
        let word = Word::normalize(&self.buf);
        self.buf.clear();
        word
    }
}

impl<I> Iterator for WordScanner<I>
where
    I: Iterator<Item = char>,
{
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        loop {
            match self.chars.next() {
                Some(c) if c.is_alphanumeric() => {
                    self.state = ScanState::InsideWord;
                    self.buf.push(c);
                }
                Some(_) => {
                    // Separator. Only flushes when a word was in progress.
                    if self.state == ScanState::InsideWord
                        && let Some(word) = self.flush()
                    {
                        return Some(word);
                    }
                }
                None => {
                    if self.state == ScanState::InsideWord {
                        return self.flush();
                    }
                    return None;
                }
            }
        }
    }
}

/// Scan a borrowed string, typically one line of input.
pub fn scan_str(text: &str) -> WordScanner<std::str::Chars<'_>> {
    WordScanner::new(text.chars())
}
