// crates/ssm-env-core/src/lib.rs
// ============================================================================
// Module: SSM Env Core Library
// Description: Public API surface for the parameter-to-environment core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! SSM Env core retrieves hierarchical parameters from a key-value parameter
//! store, normalizes their names into environment-variable identifiers, and
//! merges the results of several path prefixes into one deterministic map. It
//! is backend-agnostic and integrates through explicit interfaces: a
//! [`ParameterFetcher`] for the store, a [`SecretRegistry`] for redaction, and
//! an [`EnvironmentSink`] for the final export.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::EnvironmentSink;
pub use interfaces::FetchError;
pub use interfaces::ParameterFetcher;
pub use interfaces::SecretError;
pub use interfaces::SecretRegistry;
pub use interfaces::SinkError;
pub use runtime::CollectError;
pub use runtime::InMemoryParameterStore;
pub use runtime::MAX_PAGES_PER_PATH;
pub use runtime::ParameterCollector;
pub use runtime::Pipeline;
pub use runtime::PipelineError;
pub use runtime::RunRequest;
pub use runtime::merge_maps;
pub use runtime::page_stream;
