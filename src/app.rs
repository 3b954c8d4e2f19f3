// src/app.rs
use anyhow::{Context, Result};
use clap::Parser;

use count_words_infra::FsLineSource;
use count_words_usecase::{TallyFiles, TallyOptions};

use crate::{args::Args, config::Config, files, presentation};

/// Parse arguments, expand inputs, run the pipeline, print the table.
///
/// Any per-file failure aborts the run before anything is printed.
pub fn run() -> Result<()> {
    let config = Config::from(Args::parse());
    let paths = files::discover(&config);

    let source = FsLineSource::new();
    let orchestrator = TallyFiles::new(&source);
    let options = TallyOptions { jobs: config.jobs };

    let tally = orchestrator.run(&paths, &options).context("failed to count words")?;
    presentation::emit(&tally, &config).context("failed to emit output")?;
    Ok(())
}
