// src/files.rs
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::Config;

/// Expand the CLI inputs into concrete file paths: explicit files pass
/// through untouched, directories are walked for matching extensions.
///
/// The core pipeline never sees a directory; discovery is glue in front
/// of it. Result order is irrelevant to the merged counts, but entries
/// are sorted and deduplicated so repeated runs behave identically.
pub fn discover(config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in &config.paths {
        if path.is_dir() {
            collect_from_dir(path, config, &mut files);
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files.dedup();
    files
}

fn collect_from_dir(root: &Path, config: &Config, files: &mut Vec<PathBuf>) {
    let walker = WalkBuilder::new(root)
        .hidden(!config.include_hidden)
        .git_ignore(true)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("[warn] walk error: {err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if matches_extension(entry.path(), &config.extensions) {
            files.push(entry.into_path());
        }
    }
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allow| allow.eq_ignore_ascii_case(ext)))
}
