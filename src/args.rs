// src/args.rs
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Command line interface for `count_words`.
#[derive(Parser, Debug)]
#[command(name = "count_words", version, about = "Concurrent word frequency counter for text files")]
pub struct Args {
    /// Files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Extensions picked up when walking directories (comma separated)
    #[arg(long, default_value = "txt")]
    pub ext: String,

    /// Worker threads (defaults to available parallelism)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Show only the N most frequent words
    #[arg(long)]
    pub top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Include hidden files when walking directories
    #[arg(long)]
    pub hidden: bool,
}
