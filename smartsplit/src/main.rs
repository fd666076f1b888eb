#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod cli;
mod commands;

use std::process::ExitCode;

fn main() -> ExitCode {
    match bootstrap::run() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = ?err, "smartsplit failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
