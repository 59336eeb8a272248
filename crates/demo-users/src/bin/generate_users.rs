//! Prints the demo user dataset as JSON on stdout.
//!
//! Diagnostics go to stderr so the output can be redirected straight into a
//! realm import file:
//!
//! ```sh
//! generate-users > users.json
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use demo_users::{GenerationError, OutputError, generate_demo_users, write_users_json};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "user generation failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), RunError> {
    let users = generate_demo_users()?;
    write_users_json(&mut io::stdout().lock(), &users)?;
    info!(count = users.len(), "wrote demo users");
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
