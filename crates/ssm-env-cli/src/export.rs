// crates/ssm-env-cli/src/export.rs
// ============================================================================
// Module: CLI Export Targets
// Description: Chooses where merged parameters go and runs the export.
// Purpose: Map output settings and runner environment to an environment sink.
// Dependencies: ssm-env-broker, ssm-env-config, ssm-env-core
// ============================================================================

//! ## Overview
//! [`ExportTarget::resolve`] picks the destination:
//! - dry run: print variable names only, one per line;
//! - an explicit `output.env_file`, else the runner's `GITHUB_ENV` file;
//! - otherwise `::set-env` workflow commands on stdout.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use ssm_env_broker::GithubEnvFileSink;
use ssm_env_broker::WorkflowCommandSink;
use ssm_env_broker::format_command;
use ssm_env_config::OutputConfig;
use ssm_env_config::OutputType;
use ssm_env_core::EnvironmentSink;
use ssm_env_core::ParameterMap;
use ssm_env_core::Pipeline;
use ssm_env_core::PipelineError;
use ssm_env_core::RunRequest;
use ssm_env_core::SinkError;

use crate::t;

// ============================================================================
// SECTION: Targets
// ============================================================================

/// Resolved export destination for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Append records to a runner env file.
    EnvFile(PathBuf),
    /// Emit `::set-env` commands on stdout.
    WorkflowCommands,
    /// Print exported names without exporting.
    DryRun,
}

impl ExportTarget {
    /// Resolves the target from output settings and the `GITHUB_ENV` value.
    #[must_use]
    pub fn resolve(output: &OutputConfig, github_env: Option<&str>, dry_run: bool) -> Self {
        if dry_run {
            return Self::DryRun;
        }
        match output.output_type {
            OutputType::Env => {
                if let Some(path) = &output.env_file {
                    return Self::EnvFile(path.clone());
                }
                github_env
                    .map(str::trim)
                    .filter(|path| !path.is_empty())
                    .map_or(Self::WorkflowCommands, |path| Self::EnvFile(PathBuf::from(path)))
            }
        }
    }

    /// Returns a localized description for status messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::EnvFile(path) => t!("run.target.env_file", path = path.display()),
            Self::WorkflowCommands => t!("run.target.commands"),
            Self::DryRun => t!("run.target.dry_run"),
        }
    }
}

// ============================================================================
// SECTION: Export
// ============================================================================

/// Runs `pipeline` and exports the merged map into `target`.
///
/// `stdout` receives workflow commands or dry-run names.
///
/// # Errors
///
/// Returns [`PipelineError`] when collection or export fails. Nothing is
/// exported unless every path was collected.
pub async fn export_parameters<W: Write + Send>(
    pipeline: &Pipeline,
    request: &RunRequest,
    target: &ExportTarget,
    stdout: W,
) -> Result<ParameterMap, PipelineError> {
    match target {
        ExportTarget::EnvFile(path) => {
            pipeline.run_into(request, &GithubEnvFileSink::new(path.clone())).await
        }
        ExportTarget::WorkflowCommands => {
            pipeline.run_into(request, &WorkflowCommandSink::new(stdout)).await
        }
        ExportTarget::DryRun => pipeline.run_into(request, &NameListSink::new(stdout)).await,
    }
}

/// Renders a message as an `::error::` workflow command.
#[must_use]
pub fn error_command(message: &str) -> String {
    format_command("error", &[], message)
}

// ============================================================================
// SECTION: Name List Sink
// ============================================================================

/// Sink printing variable names, never values.
struct NameListSink<W: Write + Send> {
    /// Output writer.
    writer: Mutex<W>,
}

impl<W: Write + Send> NameListSink<W> {
    /// Creates a sink writing names to `writer`.
    const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> EnvironmentSink for NameListSink<W> {
    fn export(&self, variables: &ParameterMap) -> Result<(), SinkError> {
        let mut rendered = String::new();
        for name in variables.names() {
            rendered.push_str(name);
            rendered.push('\n');
        }
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| SinkError::WriteFailed("name writer mutex poisoned".to_string()))?;
        guard.write_all(rendered.as_bytes()).map_err(|err| SinkError::WriteFailed(err.to_string()))?;
        guard.flush().map_err(|err| SinkError::WriteFailed(err.to_string()))?;
        drop(guard);
        Ok(())
    }
}
