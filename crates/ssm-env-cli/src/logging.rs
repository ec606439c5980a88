// crates/ssm-env-cli/src/logging.rs
// ============================================================================
// Module: CLI Logging
// Description: Installs the stderr tracing subscriber for the CLI.
// Purpose: Route library diagnostics to stderr with a configurable filter.
// Dependencies: tracing-subscriber, thiserror
// ============================================================================

//! ## Overview
//! The filter comes from the configured level (config file or `--log-level`),
//! then `SSM_ENV_LOG`, then [`DEFAULT_LOG_FILTER`]. Output always goes to
//! stderr because stdout carries workflow commands.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable holding a log filter directive.
pub const LOG_ENV_VAR: &str = "SSM_ENV_LOG";
/// Filter used when nothing is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter {filter}: {reason}")]
    InvalidFilter {
        /// Offending directive.
        filter: String,
        /// Parser error message.
        reason: String,
    },
    /// A global subscriber was already installed.
    #[error("{0}")]
    Install(String),
}

// ============================================================================
// SECTION: Setup
// ============================================================================

/// Builds the filter from the configured level and the environment value.
///
/// Blank values are ignored.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] when the chosen directive does not
/// parse.
pub fn resolve_filter(
    configured: Option<&str>,
    env_value: Option<&str>,
) -> Result<EnvFilter, LoggingError> {
    let directive = configured
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| env_value.map(str::trim).filter(|value| !value.is_empty()))
        .unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::try_new(directive).map_err(|err| LoggingError::InvalidFilter {
        filter: directive.to_string(),
        reason: err.to_string(),
    })
}

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Returns [`LoggingError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init_logging(configured: Option<&str>) -> Result<(), LoggingError> {
    let filter = resolve_filter(configured, env::var(LOG_ENV_VAR).ok().as_deref())?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}
