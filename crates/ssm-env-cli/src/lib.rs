// crates/ssm-env-cli/src/lib.rs
// ============================================================================
// Module: SSM Env CLI Library
// Description: Shared helpers for the ssm-env command-line interface.
// Purpose: Provide reusable components (i18n, logging, export) for the binary.
// Dependencies: ssm-env-core, ssm-env-broker, ssm-env-config, tracing-subscriber
// ============================================================================

//! ## Overview
//! This library houses the CLI's message catalog, logging setup, and export
//! target selection. The binary entry point (`src/main.rs`) wires these to the
//! AWS fetcher and the process streams.
//!
//! stdout carries workflow commands for the runner; diagnostics go to stderr.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod export;
/// Internationalization helpers and message catalog.
pub mod i18n;
pub mod logging;

#[cfg(test)]
mod tests;
