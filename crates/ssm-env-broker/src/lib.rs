// crates/ssm-env-broker/src/lib.rs
// ============================================================================
// Module: SSM Env Broker Library
// Description: Environment sinks and secret registries for CI runners.
// Purpose: Deliver merged parameters and redaction masks to the host runner.
// Dependencies: ssm-env-core, rand, tracing
// ============================================================================

//! ## Overview
//! SSM Env Broker provides ready-made [`EnvironmentSink`] and
//! [`SecretRegistry`] implementations for GitHub Actions style runners:
//! - [`GithubEnvFileSink`] appends delimited records to the `GITHUB_ENV` file.
//! - [`WorkflowCommandSink`] emits `::set-env` workflow commands.
//! - [`MemorySink`] keeps exports in memory.
//! - [`WorkflowCommandMasker`] emits `::add-mask::` commands.
//! - [`SecretLedger`] remembers secrets and redacts them from diagnostics.
//! - [`FanoutRegistry`] forwards registrations to several registries.
//!
//! Invariants:
//! - Sinks validate every entry before writing any of them.
//! - Registries never echo secret values in their errors.
//!
//! [`EnvironmentSink`]: ssm_env_core::EnvironmentSink
//! [`SecretRegistry`]: ssm_env_core::SecretRegistry

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod command;
pub mod secret;
pub mod sink;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use command::escape_data;
pub use command::escape_property;
pub use command::format_command;
pub use secret::FanoutRegistry;
pub use secret::REDACTED;
pub use secret::SecretLedger;
pub use secret::WorkflowCommandMasker;
pub use sink::GITHUB_ENV_VAR;
pub use sink::GithubEnvFileSink;
pub use sink::MemorySink;
pub use sink::WorkflowCommandSink;
