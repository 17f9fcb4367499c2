//! `estate-check` -- validate a proposed unit update offline.
//!
//! Reads a current unit snapshot and a proposed update from JSON files,
//! runs the rules engine, prints the result as JSON on stdout, and exits
//! with `0` (accepted), `2` (rejected) or `1` (could not run).
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default             | Description                          |
//! |---------------------------|----------|---------------------|--------------------------------------|
//! | `RUST_LOG`                | no       | `estate_check=info` | Log filter                           |
//! | `ESTATE_CHECK_LOG_FORMAT` | no       | `text`              | `text` or `json` log lines on stderr |
//! | `ESTATE_CHECK_ACTOR`      | no       | --                  | Emit an audit record for this actor  |
//! | `ESTATE_CHECK_PRETTY`     | no       | `true`              | Pretty-print stdout JSON             |

use std::path::PathBuf;

use estate_check::config::{CheckConfig, LogFormat};
use estate_check::error::CheckError;
use estate_check::runner;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();

    let config = CheckConfig::from_env().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    init_tracing(config.log_format);

    let (current_path, proposed_path) = parse_args().unwrap_or_else(|e| {
        tracing::error!("{e}");
        std::process::exit(1);
    });

    match runner::run_check(&config, &current_path, &proposed_path, chrono::Utc::now()) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            std::process::exit(outcome.exit_code());
        }
        Err(e) => {
            tracing::error!("Check failed: {e:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "estate_check=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn parse_args() -> Result<(PathBuf, PathBuf), CheckError> {
    let mut args = std::env::args_os().skip(1);
    match (args.next(), args.next(), args.next()) {
        (Some(current), Some(proposed), None) => Ok((current.into(), proposed.into())),
        _ => Err(CheckError::Usage),
    }
}
