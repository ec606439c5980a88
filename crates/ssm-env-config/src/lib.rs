// crates/ssm-env-config/src/lib.rs
// ============================================================================
// Module: SSM Env Config Library
// Description: Layered configuration model and GitHub Action input parsing.
// Purpose: Single source of truth for ssm-env.toml and action input semantics.
// Dependencies: ssm-env-core, serde, toml
// ============================================================================

//! ## Overview
//! `ssm-env-config` defines [`SsmEnvConfig`], loaded from an optional TOML file
//! and then overlaid with GitHub Action inputs ([`ActionInputs`]). Validation is
//! strict and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod inputs;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use inputs::ActionInputs;
pub use inputs::INPUT_NAMES;
pub use inputs::input_variable;
pub use inputs::is_true;
pub use inputs::parse_paths;
