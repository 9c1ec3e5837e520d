//! GPU Sizer
//!
//! Sizes the GPU fleet for an AI transformation deal. It handles:
//! - Front office (real-time call center) sizing from business activity
//! - Back office (batch) sizing, optionally on front office GPUs after hours
//! - Cost over time and comparison against per-minute pricing
//! - Text, CSV and JSON output

pub mod cli;
pub mod commands;
pub mod export;
pub mod metrics;
pub mod models;
pub mod parser;
pub mod presets;
pub mod session;

use std::process::ExitCode;

use clap::Parser;

pub use session::AppState;

/// Error type for calculator commands
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] parser::ValidationFailure),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Session state lock poisoned")]
    LockPoisoned,
}

// Hosts receive errors as plain strings
impl serde::Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ============================================================================
// Application Setup
// ============================================================================

fn log_level(verbose: u8, quiet: bool) -> tracing::Level {
    match (quiet, verbose) {
        (true, _) => tracing::Level::WARN,
        (false, 0) => tracing::Level::INFO,
        (false, 1) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    }
}

pub fn run() -> ExitCode {
    let cli = cli::Cli::parse();

    // Logs go to stderr so stdout stays clean for csv/json
    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose, cli.quiet))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Using benchmark {}", presets::h200_llama_70b().display_name());

    match cli::execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Validation(failure)) => {
            eprintln!("{}", failure);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser::{Field, FieldError, Problem, ValidationFailure};

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0, false), tracing::Level::INFO);
        assert_eq!(log_level(1, false), tracing::Level::DEBUG);
        assert_eq!(log_level(3, false), tracing::Level::TRACE);
        assert_eq!(log_level(2, true), tracing::Level::WARN);
    }

    #[test]
    fn test_command_error_serializes_as_string() {
        let err = CommandError::from(ValidationFailure {
            fields: vec![FieldError {
                field: Field::CallsPerDay,
                problem: Problem::Missing,
            }],
        });
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            "\"Please fill in all required fields: calls_per_day is required\""
        );
    }
}
