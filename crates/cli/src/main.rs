//! `order-desk` entry point.

use std::process::ExitCode;

use cli::{Config, LogFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(&config.log_level));

    // stdout carries the report; logs go to stderr.
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config);

    // 2. Parse the command line
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, path) = match cli::parse_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    // 3. Run the command and print the report
    let report = match cli::run(command, &path, &config) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = %err, path = %path.display(), "command failed");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize report");
            return ExitCode::FAILURE;
        }
    }

    if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
