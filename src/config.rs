// src/config.rs
use std::path::PathBuf;

use crate::args::{Args, OutputFormat};

/// Resolved runtime configuration derived from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub jobs: usize,
    pub top: Option<usize>,
    pub format: OutputFormat,
    pub include_hidden: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let extensions = args
            .ext
            .split(',')
            .map(|e| e.trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        Self {
            paths: args.paths,
            extensions,
            jobs: args.jobs.unwrap_or_else(num_cpus::get).max(1),
            top: args.top,
            format: args.format,
            include_hidden: args.hidden,
        }
    }
}
