// crates/ssm-env-broker/src/sink/mod.rs
// ============================================================================
// Module: SSM Env Sinks
// Description: Environment sink implementations for runner exports.
// Purpose: Deliver merged parameter maps to a host process environment.
// Dependencies: ssm-env-core, std
// ============================================================================

//! ## Overview
//! Sinks implement [`ssm_env_core::EnvironmentSink`]. Every sink renders and
//! validates the whole map first and then performs a single write, so a
//! rejected entry never leaves a partial export behind.

// ============================================================================
// SECTION: Imports
// ============================================================================

use ssm_env_core::SinkError;

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Rejects names that cannot be represented as a single-line variable name.
pub(crate) fn validate_name(name: &str) -> Result<(), SinkError> {
    if name.is_empty() {
        return Err(SinkError::InvalidVariable {
            name: name.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    if name.contains(['\r', '\n']) {
        return Err(SinkError::InvalidVariable {
            name: name.escape_default().to_string(),
            reason: "name contains a line break".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// SECTION: Implementations
// ============================================================================

pub mod command;
pub mod env_file;
pub mod memory;

pub use command::WorkflowCommandSink;
pub use env_file::GITHUB_ENV_VAR;
pub use env_file::GithubEnvFileSink;
pub use memory::MemorySink;
