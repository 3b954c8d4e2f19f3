// src/main.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    match count_words::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
