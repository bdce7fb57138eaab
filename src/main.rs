//! Binary entrypoint.
//!
//! Argument parsing, configuration, and the serving loop all live in
//! the `cli` module; this only reports failure and sets the exit code.

use std::process::ExitCode;

use quill::cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
