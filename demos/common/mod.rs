//! Shared startup for the demo programs.

use std::process::ExitCode;

use clap::Parser;
use hookmsg::SendError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Command-line arguments shared by every demo.
#[derive(Debug, Parser)]
pub struct Args {
    /// Webhook URL to post to
    pub url: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses arguments and sets up the tracing subscriber.
pub fn init() -> Args {
    let args = Args::parse();
    setup_tracing(args.verbose);
    args
}

fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Reports the outcome of a send and maps it to an exit code.
pub fn finish(result: Result<(), SendError>) -> ExitCode {
    match result {
        Ok(()) => {
            tracing::info!("Message delivered");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_rate_limited() => {
            tracing::warn!(retry_after = ?e.retry_after(), "Rate limited: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("Send failed: {e}");
            ExitCode::FAILURE
        }
    }
}
