//! billdoc CLI binary entry point
//!
//! Sets up logging, then hands over to the library's `run_cli()`.

use anyhow::Result;
use billdoc_cli::run_cli;

fn main() -> Result<()> {
    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    run_cli()
}
