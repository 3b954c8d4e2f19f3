// crates/ports/src/source.rs
use std::path::Path;

use count_words_shared_kernel::Result;

/// Lazy, finite, forward-only stream of lines. Terminators are already
/// stripped; I/O failures during iteration surface as per-item errors.
pub type LineIter = Box<dyn Iterator<Item = Result<String>> + Send>;

/// Port for streaming the contents of a single file.
///
/// Implementations hold whatever handle they need only for the lifetime
/// of the returned iterator, so dropping it mid-stream releases the
/// file.
pub trait LineSource: Send + Sync {
    /// Open `path` and return its lines, lazily.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidArgument` for an empty or whitespace-only
    /// path, `InfrastructureError::NotFound` when the path does not
    /// reference an existing file.
    fn read_lines(&self, path: &Path) -> Result<LineIter>;

    /// Whether `path` refers to an existing file.
    ///
    /// Never fails for a missing file; a blank path is still rejected
    /// with `DomainError::InvalidArgument`.
    fn exists(&self, path: &Path) -> Result<bool>;
}
