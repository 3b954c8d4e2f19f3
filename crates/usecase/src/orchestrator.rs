// crates/usecase/src/orchestrator.rs
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use count_words_domain::{WordTally, merge_tallies};
use count_words_ports::LineSource;
use count_words_shared_kernel::{ApplicationError, CountWordsError, Result};
#[cfg(feature = "parallel")]
use count_words_shared_kernel::InfrastructureError;

use crate::{cancel::CancelToken, pipeline::tally_file};

/// Execution knobs for a tally run.
#[derive(Debug, Clone)]
pub struct TallyOptions {
    /// Worker thread count. `1` forces a sequential run.
    pub jobs: usize,
}

impl Default for TallyOptions {
    fn default() -> Self {
        Self { jobs: 1 }
    }
}

/// Drives the whole run: filters input paths, fans out one task per
/// file, waits for all of them, and merges the per-file tallies.
///
/// The source is injected at construction; the orchestrator owns no
/// other collaborators.
pub struct TallyFiles<'a> {
    source: &'a dyn LineSource,
}

impl<'a> TallyFiles<'a> {
    pub fn new(source: &'a dyn LineSource) -> Self {
        Self { source }
    }

    /// Count words across `paths` and merge the results.
    ///
    /// Empty and whitespace-only path entries are dropped up front; an
    /// empty remainder returns an empty tally without touching the
    /// source. Any per-file failure fails the whole run.
    pub fn run(&self, paths: &[PathBuf], options: &TallyOptions) -> Result<WordTally> {
        self.run_with_cancel(paths, options, &CancelToken::new())
    }

    /// Like [`run`](Self::run), observing an externally owned token.
    /// The first per-file failure also cancels the token so remaining
    /// tasks stop promptly instead of reading to the end.
    pub fn run_with_cancel(
        &self,
        paths: &[PathBuf],
        options: &TallyOptions,
        cancel: &CancelToken,
    ) -> Result<WordTally> {
        let valid: Vec<&Path> =
            paths.iter().map(PathBuf::as_path).filter(|p| !is_blank(p)).collect();
        if valid.is_empty() {
            return Ok(WordTally::new());
        }

        let results = self.tally_all(&valid, options, cancel)?;
        aggregate(results)
    }

    #[cfg(feature = "parallel")]
    fn tally_all(
        &self,
        paths: &[&Path],
        options: &TallyOptions,
        cancel: &CancelToken,
    ) -> Result<Vec<Result<WordTally>>> {
        if paths.len() < 2 || options.jobs == 1 {
            return Ok(self.tally_sequential(paths, cancel));
        }
        self.tally_parallel(paths, options, cancel)
    }

    #[cfg(not(feature = "parallel"))]
    fn tally_all(
        &self,
        paths: &[&Path],
        options: &TallyOptions,
        cancel: &CancelToken,
    ) -> Result<Vec<Result<WordTally>>> {
        let _ = options;
        Ok(self.tally_sequential(paths, cancel))
    }

    fn tally_sequential(&self, paths: &[&Path], cancel: &CancelToken) -> Vec<Result<WordTally>> {
        paths.iter().map(|path| self.tally_one(path, cancel)).collect()
    }

    /// One independent task per file, scheduled on a dedicated pool.
    /// Collecting into a `Vec` is the wait-all barrier: aggregation only
    /// starts once every task has produced its result.
    #[cfg(feature = "parallel")]
    fn tally_parallel(
        &self,
        paths: &[&Path],
        options: &TallyOptions,
        cancel: &CancelToken,
    ) -> Result<Vec<Result<WordTally>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.jobs)
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

        Ok(pool.install(|| {
            paths.par_iter().map(|path| self.tally_one(path, cancel)).collect()
        }))
    }

    fn tally_one(&self, path: &Path, cancel: &CancelToken) -> Result<WordTally> {
        if cancel.is_cancelled() {
            return Err(ApplicationError::Cancelled.into());
        }
        let result = tally_file(self.source, path, cancel);
        if result.is_err() {
            // Halt sibling tasks promptly; the aggregate step keeps the
            // first real failure, not the secondary cancellations.
            cancel.cancel();
        }
        result
    }
}

/// Per-file results are all materialised before this runs. Merging only
/// starts when no task failed; otherwise the first real failure is
/// surfaced wrapped in `AggregateFailure`.
fn aggregate(results: Vec<Result<WordTally>>) -> Result<WordTally> {
    let mut tallies = Vec::with_capacity(results.len());
    let mut failed = 0usize;
    let mut first_failure: Option<CountWordsError> = None;

    for result in results {
        match result {
            Ok(tally) => tallies.push(tally),
            Err(err) => {
                failed += 1;
                if first_failure.is_none() && !is_cancellation(&err) {
                    first_failure = Some(err);
                }
            }
        }
    }

    if let Some(source) = first_failure {
        return Err(ApplicationError::AggregateFailure { failed, source: Box::new(source) }.into());
    }
    if failed > 0 {
        // Every failure was a cancellation: the run was aborted.
        return Err(ApplicationError::Cancelled.into());
    }
    Ok(merge_tallies(tallies))
}

fn is_cancellation(err: &CountWordsError) -> bool {
    matches!(err, CountWordsError::Application(ApplicationError::Cancelled))
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty()
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use count_words_shared_kernel::{InfrastructureError, Occurrences};
    use count_words_ports::LineIter;

    use super::*;

    /// In-memory source: maps paths to line vectors and counts how many
    /// times it was opened.
    #[derive(Default)]
    struct StubSource {
        files: HashMap<PathBuf, Vec<String>>,
        opens: AtomicUsize,
    }

    impl StubSource {
        fn with_files(files: &[(&str, &str)]) -> Self {
            let files = files
                .iter()
                .map(|(path, content)| {
                    (PathBuf::from(path), content.lines().map(String::from).collect())
                })
                .collect();
            Self { files, opens: AtomicUsize::new(0) }
        }

        fn opens(&self) -> usize {
            self.opens.load(Ordering::Relaxed)
        }
    }

    impl LineSource for StubSource {
        fn read_lines(&self, path: &Path) -> Result<LineIter> {
            self.opens.fetch_add(1, Ordering::Relaxed);
            match self.files.get(path) {
                Some(lines) => Ok(Box::new(lines.clone().into_iter().map(Ok))),
                None => Err(InfrastructureError::NotFound { path: path.to_path_buf() }.into()),
            }
        }

        fn exists(&self, path: &Path) -> Result<bool> {
            Ok(self.files.contains_key(path))
        }
    }

    fn paths(raw: &[&str]) -> Vec<PathBuf> {
        raw.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn empty_path_list_returns_empty_without_touching_source() {
        let stub = StubSource::default();
        let tally = TallyFiles::new(&stub).run(&[], &TallyOptions::default()).unwrap();
        assert!(tally.is_empty());
        assert_eq!(stub.opens(), 0);
    }

    #[test]
    fn blank_path_entries_are_filtered_out() {
        let stub = StubSource::default();
        let tally =
            TallyFiles::new(&stub).run(&paths(&["", "   ", "\t"]), &TallyOptions::default()).unwrap();
        assert!(tally.is_empty());
        assert_eq!(stub.opens(), 0);
    }

    #[test]
    fn merges_counts_across_files() {
        let stub = StubSource::with_files(&[
            ("a.txt", "Hello world\nhello again"),
            ("b.txt", "HELLO test"),
        ]);
        let tally = TallyFiles::new(&stub)
            .run(&paths(&["a.txt", "b.txt"]), &TallyOptions { jobs: 2 })
            .unwrap();

        assert_eq!(tally.get("hello"), Some(Occurrences::from(3)));
        assert_eq!(tally.get("world"), Some(Occurrences::one()));
        assert_eq!(tally.get("again"), Some(Occurrences::one()));
        assert_eq!(tally.get("test"), Some(Occurrences::one()));
        assert_eq!(stub.opens(), 2);
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let stub = StubSource::with_files(&[
            ("a.txt", "one two two"),
            ("b.txt", "two three"),
            ("c.txt", "three three one"),
        ]);
        let inputs = paths(&["a.txt", "b.txt", "c.txt"]);
        let orchestrator = TallyFiles::new(&stub);

        let sequential = orchestrator.run(&inputs, &TallyOptions { jobs: 1 }).unwrap();
        let parallel = orchestrator.run(&inputs, &TallyOptions { jobs: 3 }).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn per_file_failure_fails_the_whole_run() {
        let stub = StubSource::with_files(&[("a.txt", "hello")]);
        let err = TallyFiles::new(&stub)
            .run(&paths(&["a.txt", "missing.txt"]), &TallyOptions::default())
            .unwrap_err();

        match err {
            CountWordsError::Application(ApplicationError::AggregateFailure { failed, source }) => {
                assert!(failed >= 1);
                assert!(matches!(
                    *source,
                    CountWordsError::Infrastructure(InfrastructureError::NotFound { .. })
                ));
            }
            other => panic!("expected AggregateFailure, got {other:?}"),
        }
    }

    #[test]
    fn pre_cancelled_token_reports_cancelled() {
        let stub = StubSource::with_files(&[("a.txt", "hello")]);
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = TallyFiles::new(&stub)
            .run_with_cancel(&paths(&["a.txt"]), &TallyOptions::default(), &cancel)
            .unwrap_err();

        assert!(matches!(err, CountWordsError::Application(ApplicationError::Cancelled)));
    }

    #[test]
    fn failure_cancels_the_shared_token() {
        let stub = StubSource::default();
        let cancel = CancelToken::new();

        let _ = TallyFiles::new(&stub).run_with_cancel(
            &paths(&["missing.txt"]),
            &TallyOptions::default(),
            &cancel,
        );

        assert!(cancel.is_cancelled());
    }
}
