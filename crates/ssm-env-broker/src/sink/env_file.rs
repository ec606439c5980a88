// crates/ssm-env-broker/src/sink/env_file.rs
// ============================================================================
// Module: GitHub Env File Sink
// Description: Appends heredoc-delimited records to the runner env file.
// Purpose: Export variables to later workflow steps through `GITHUB_ENV`.
// Dependencies: ssm-env-core, rand, tracing, std
// ============================================================================

//! ## Overview
//! The runner reads `NAME<<DELIMITER` records from the file named by
//! `GITHUB_ENV` after the step finishes. Each record is:
//!
//! ```text
//! NAME<<ghadelimiter_<random>
//! VALUE
//! ghadelimiter_<random>
//! ```
//!
//! The delimiter is random per record; a name or value that contains it is
//! rejected. All records are rendered before the file is opened and written
//! in one append.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use ssm_env_core::EnvironmentSink;
use ssm_env_core::ParameterMap;
use ssm_env_core::SinkError;
use tracing::debug;

use crate::sink::validate_name;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable naming the runner env file.
pub const GITHUB_ENV_VAR: &str = "GITHUB_ENV";
/// Prefix shared by every generated delimiter.
const DELIMITER_PREFIX: &str = "ghadelimiter_";

// ============================================================================
// SECTION: Sink
// ============================================================================

/// Sink appending delimited records to a runner env file.
#[derive(Debug, Clone)]
pub struct GithubEnvFileSink {
    /// Env file path.
    path: PathBuf,
}

impl GithubEnvFileSink {
    /// Creates a sink appending to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    /// Returns the env file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders every record without touching the file.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::InvalidVariable`] when a name is empty or
    /// multi-line, or when a name or value contains its delimiter.
    pub fn render(variables: &ParameterMap) -> Result<String, SinkError> {
        let mut rendered = String::new();
        for (name, value) in variables.iter() {
            validate_name(name)?;
            let delimiter = format!("{DELIMITER_PREFIX}{:032x}", rand::random::<u128>());
            if name.contains(&delimiter) {
                return Err(SinkError::InvalidVariable {
                    name: name.to_string(),
                    reason: "name contains the record delimiter".to_string(),
                });
            }
            if value.contains(&delimiter) {
                return Err(SinkError::InvalidVariable {
                    name: name.to_string(),
                    reason: "value contains the record delimiter".to_string(),
                });
            }
            rendered.push_str(&format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"));
        }
        Ok(rendered)
    }
}

impl EnvironmentSink for GithubEnvFileSink {
    fn export(&self, variables: &ParameterMap) -> Result<(), SinkError> {
        let rendered = Self::render(variables)?;
        if rendered.is_empty() {
            debug!(path = %self.path.display(), "no variables to export");
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| SinkError::WriteFailed(format!("{}: {err}", self.path.display())))?;
        file.write_all(rendered.as_bytes())
            .map_err(|err| SinkError::WriteFailed(format!("{}: {err}", self.path.display())))?;
        file.flush()
            .map_err(|err| SinkError::WriteFailed(format!("{}: {err}", self.path.display())))?;
        debug!(path = %self.path.display(), variables = variables.len(), "appended env file records");
        Ok(())
    }
}
