use std::{
    error::Error,
    io::{self, BufRead},
    process::ExitCode,
};

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use rover_squad::interpreter::Interpreter;

fn main() -> ExitCode {
    // Diagnostics go to stderr, stdout only carries the rover reports.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match Interpreter::new(stdin.lock().lines()).run(&mut stdout.lock()) {
        Ok(report) => {
            debug!(rovers = report.outcomes().len(), "Script finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let cause = e.source().map(ToString::to_string).unwrap_or_default();
            error!(error = %e, %cause, "Script aborted");
            ExitCode::FAILURE
        }
    }
}
