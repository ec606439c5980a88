// crates/ssm-env-broker/src/sink/command.rs
// ============================================================================
// Module: Workflow Command Sink
// Description: Exports variables as `::set-env` workflow commands.
// Purpose: Support runners that do not provide an env file.
// Dependencies: ssm-env-core, std
// ============================================================================

//! ## Overview
//! `WorkflowCommandSink` writes one `::set-env name=NAME::VALUE` line per
//! variable to its writer (normally stdout). The full batch is rendered first
//! and written with a single call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use ssm_env_core::EnvironmentSink;
use ssm_env_core::ParameterMap;
use ssm_env_core::SinkError;

use crate::command::format_command;
use crate::sink::validate_name;

// ============================================================================
// SECTION: Sink
// ============================================================================

/// Sink emitting `::set-env` workflow commands.
pub struct WorkflowCommandSink<W: Write + Send> {
    /// Output writer for command lines.
    writer: Mutex<W>,
}

impl<W: Write + Send> WorkflowCommandSink<W> {
    /// Creates a sink writing commands to `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> EnvironmentSink for WorkflowCommandSink<W> {
    fn export(&self, variables: &ParameterMap) -> Result<(), SinkError> {
        let mut rendered = String::new();
        for (name, value) in variables.iter() {
            validate_name(name)?;
            rendered.push_str(&format_command("set-env", &[("name", name)], value));
            rendered.push('\n');
        }
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| SinkError::WriteFailed("command writer mutex poisoned".to_string()))?;
        guard.write_all(rendered.as_bytes()).map_err(|err| SinkError::WriteFailed(err.to_string()))?;
        guard.flush().map_err(|err| SinkError::WriteFailed(err.to_string()))?;
        drop(guard);
        Ok(())
    }
}
