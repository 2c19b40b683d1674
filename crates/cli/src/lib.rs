//! Command-line front end for the order aggregate.
//!
//! Reads an order document (the JSON form of [`domain::Order`]), applies a
//! command to it and produces an [`OrderReport`].

pub mod config;
pub mod error;
pub mod report;

use std::path::{Path, PathBuf};

use domain::{Order, ValidationRules, validate};

pub use config::{Config, LogFormat};
pub use error::CliError;
pub use report::{OrderFlags, OrderReport};

pub const USAGE: &str = "usage: order-desk <inspect|issue|cancel> <order.json>";

/// What to do with the loaded order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Recalculate (while editable) and validate.
    Inspect,
    /// Drop a leftover blank row, recalculate, validate and issue.
    Issue,
    /// Cancel and validate.
    Cancel,
}

impl Command {
    fn parse(name: &str) -> Result<Self, CliError> {
        match name {
            "inspect" => Ok(Command::Inspect),
            "issue" => Ok(Command::Issue),
            "cancel" => Ok(Command::Cancel),
            other => Err(CliError::Usage(format!("unknown command '{other}'\n{USAGE}"))),
        }
    }
}

/// Parses `<command> <path>` from the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<(Command, PathBuf), CliError> {
    match args {
        [command, path] => Ok((Command::parse(command)?, PathBuf::from(path))),
        _ => Err(CliError::Usage(USAGE.to_string())),
    }
}

/// Applies `command` to the order in `document` and reports the result.
///
/// An order that cannot be issued at all fails with its transition error
/// before anything is touched. An order with violations is never issued;
/// the report lists what blocked it and the order comes back unchanged
/// apart from the recalculated total.
#[tracing::instrument(skip(document, rules))]
pub fn execute(
    command: Command,
    document: &str,
    rules: &ValidationRules,
) -> Result<OrderReport, CliError> {
    let mut order: Order = serde_json::from_str(document)?;

    match command {
        Command::Inspect => {
            if order.is_editable() {
                order.recalculate_total();
            }
        }
        Command::Issue => {
            order.ensure_issuable()?;
            order.remove_empty_item();
            order.recalculate_total();

            let violations = validate(&order, rules);
            if !violations.is_empty() {
                tracing::warn!(
                    order_id = ?order.id(),
                    count = violations.len(),
                    "order not issued: validation failed"
                );
                return Ok(OrderReport::new(order, violations));
            }

            order.issue()?;
        }
        Command::Cancel => order.cancel()?,
    }

    let violations = validate(&order, rules);
    Ok(OrderReport::new(order, violations))
}

/// Reads the order document at `path` and runs `command` on it.
pub fn run(command: Command, path: &Path, config: &Config) -> Result<OrderReport, CliError> {
    let document = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;

    execute(command, &document, &config.validation_rules())
}
