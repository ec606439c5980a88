// crates/ssm-env-config/src/config.rs
// ============================================================================
// Module: SSM Env Configuration
// Description: Configuration loading, layering, and validation for ssm-env.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: ssm-env-core, serde, toml, tracing
// ============================================================================

//! ## Overview
//! Configuration is layered, with later layers winning:
//! 1. Built-in defaults.
//! 2. An optional TOML file (`--config`, `SSM_ENV_CONFIG`, or `ssm-env.toml`).
//! 3. GitHub Action inputs, applied with [`SsmEnvConfig::apply_inputs`].
//! 4. Command-line flags, applied by the CLI.
//!
//! The file is size and path limited. An explicitly named file must exist; the
//! default file is optional.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use ssm_env_core::NamingPolicy;
use ssm_env_core::RunRequest;
use thiserror::Error;
use tracing::warn;

use crate::inputs::ActionInputs;
use crate::inputs::parse_paths;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "ssm-env.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "SSM_ENV_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a parameter path.
pub const MAX_PARAMETER_PATH_LENGTH: usize = 2048;
/// Maximum number of parameter paths.
pub const MAX_PATHS: usize = 256;
/// Smallest page size accepted by `GetParametersByPath`.
pub const MIN_MAX_RESULTS: i32 = 1;
/// Largest page size accepted by `GetParametersByPath`.
pub const MAX_MAX_RESULTS: i32 = 10;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Top-level ssm-env configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SsmEnvConfig {
    /// Parameter path prefixes, in precedence order (later wins).
    #[serde(default)]
    pub paths: Vec<String>,
    /// Include parameters in nested sub-hierarchies.
    #[serde(default)]
    pub recursive: bool,
    /// Ask the store to decrypt encrypted values.
    #[serde(default)]
    pub with_decryption: bool,
    /// Name formatting policy.
    #[serde(default)]
    pub naming: NamingPolicy,
    /// Export destination settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Parameter store connection settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Diagnostic logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SsmEnvConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: `path`, then `SSM_ENV_CONFIG`, then `ssm-env.toml` in
    /// the working directory. Only the last one may be missing, in which case
    /// defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, required) = resolve_path(path)?;
        validate_path(&resolved)?;
        if !required && !resolved.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(&resolved)
            .map_err(|err| ConfigError::Io(format!("{}: {err}", resolved.display())))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Overlays provided action inputs onto this configuration.
    ///
    /// Inputs that were not provided leave the current value untouched. An
    /// unknown `output-type` logs a warning and keeps the current output.
    pub fn apply_inputs(&mut self, inputs: &ActionInputs) {
        if let Some(raw) = inputs.get("paths") {
            self.paths = parse_paths(raw);
        }
        if let Some(recursive) = inputs.flag("recursive") {
            self.recursive = recursive;
        }
        if let Some(with_decryption) = inputs.flag("with-decryption") {
            self.with_decryption = with_decryption;
        }
        if let Some(split_env) = inputs.flag("split-env") {
            self.naming.split_env = split_env;
        }
        if let Some(upper_case) = inputs.flag("upper-case") {
            self.naming.upper_case = upper_case;
        }
        if let Some(prefix) = inputs.get("env-prefix") {
            self.naming.env_prefix = prefix.to_string();
        }
        if let Some(label) = inputs.get("output-type") {
            self.output.set_type_label(label);
        }
    }

    /// Validates the configuration for internal consistency.
    ///
    /// Paths are trimmed in place.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.paths.len() > MAX_PATHS {
            return Err(ConfigError::Invalid(format!("paths exceeds {MAX_PATHS} entries")));
        }
        for path in &mut self.paths {
            let trimmed = path.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::Invalid("paths entries must be non-empty".to_string()));
            }
            if trimmed.len() > MAX_PARAMETER_PATH_LENGTH {
                return Err(ConfigError::Invalid(format!(
                    "paths entry exceeds {MAX_PARAMETER_PATH_LENGTH} characters"
                )));
            }
            *path = trimmed.to_string();
        }
        self.output.validate()?;
        self.store.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Builds the pipeline request described by this configuration.
    #[must_use]
    pub fn run_request(&self) -> RunRequest {
        RunRequest {
            paths: self.paths.clone(),
            recursive: self.recursive,
            with_decryption: self.with_decryption,
        }
    }
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Supported export destinations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    /// Export into the job environment.
    #[default]
    Env,
}

impl OutputType {
    /// Parses an output type label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "env" => Some(Self::Env),
            _ => None,
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Env => "env",
        }
    }
}

/// Export destination settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Export destination.
    #[serde(default, rename = "type")]
    pub output_type: OutputType,
    /// Env file to append to instead of the one named by `GITHUB_ENV`.
    #[serde(default)]
    pub env_file: Option<PathBuf>,
}

impl OutputConfig {
    /// Applies an output type label, falling back to `env` when unknown.
    pub fn set_type_label(&mut self, label: &str) {
        if let Some(output_type) = OutputType::from_label(label) {
            self.output_type = output_type;
        } else {
            warn!(output_type = label, fallback = OutputType::Env.as_label(), "unknown output type");
            self.output_type = OutputType::Env;
        }
    }

    /// Validates output settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.env_file {
            validate_path_string("output.env_file", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// Parameter store connection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Region override (defaults to the ambient AWS configuration).
    #[serde(default)]
    pub region: Option<String>,
    /// Endpoint override for local or compatible stores.
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Page size requested per call.
    #[serde(default)]
    pub max_results: Option<i32>,
}

impl StoreConfig {
    /// Validates store settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when store settings are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(region) = &self.region
            && region.trim().is_empty()
        {
            return Err(ConfigError::Invalid("store.region must be non-empty".to_string()));
        }
        if let Some(endpoint) = &self.endpoint_url {
            let trimmed = endpoint.trim();
            if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
                return Err(ConfigError::Invalid(
                    "store.endpoint_url must include http:// or https://".to_string(),
                ));
            }
        }
        if let Some(max_results) = self.max_results
            && !(MIN_MAX_RESULTS..=MAX_MAX_RESULTS).contains(&max_results)
        {
            return Err(ConfigError::Invalid(format!(
                "store.max_results must be between {MIN_MAX_RESULTS} and {MAX_MAX_RESULTS}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Diagnostic logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log filter directive, such as `info` or `ssm_env_core=debug`.
    #[serde(default)]
    pub level: Option<String>,
}

impl LoggingConfig {
    /// Validates logging settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.level
            && level.trim().is_empty()
        {
            return Err(ConfigError::Invalid("logging.level must be non-empty".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path and whether it must exist.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
