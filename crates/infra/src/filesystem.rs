// crates/infra/src/filesystem.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use count_words_ports::{LineIter, LineSource};
use count_words_shared_kernel::{DomainError, InfrastructureError, Result};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `LineSource` port.
///
/// Reads are buffered and bounded: one line is in memory at a time, so
/// file size never dictates memory use. Files are opened read-only with
/// the platform's default shared-read semantics.
#[derive(Debug, Default)]
pub struct FsLineSource;

impl FsLineSource {
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for FsLineSource {
    fn read_lines(&self, path: &Path) -> Result<LineIter> {
        validate_path(path)?;
        if !path.is_file() {
            return Err(InfrastructureError::NotFound { path: path.to_path_buf() }.into());
        }
        let reader = FileReader::open_buffered(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(Box::new(FileLines { path: path.to_path_buf(), reader, done: false }))
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        validate_path(path)?;
        Ok(path.is_file())
    }
}

fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Err(DomainError::InvalidArgument {
            reason: "file path must not be empty or whitespace-only".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Lazy line iterator owning the open handle. The handle is released
/// when the iterator is dropped, including on early termination.
struct FileLines {
    path: PathBuf,
    reader: BufReader<File>,
    done: bool,
}

impl Iterator for FileLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                // read_line keeps the terminator; strip \n and \r\n.
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(source) => {
                self.done = true;
                Some(Err(
                    InfrastructureError::FileRead { path: self.path.clone(), source }.into()
                ))
            }
        }
    }
}
