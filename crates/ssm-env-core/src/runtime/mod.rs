// crates/ssm-env-core/src/runtime/mod.rs
// ============================================================================
// Module: SSM Env Runtime
// Description: Pagination, collection, merge, and pipeline orchestration.
// Purpose: Turn path prefixes into one merged, formatted parameter map.
// Dependencies: crate::{core, interfaces}, futures, tracing
// ============================================================================

//! ## Overview
//! Runtime modules implement the retrieval pipeline:
//! - [`page_stream`] turns a fetcher into a lazy sequence of batches.
//! - [`ParameterCollector`] formats, registers, and accumulates one path.
//! - [`merge_maps`] combines per-path maps with a right-biased policy.
//! - [`Pipeline`] runs collectors concurrently and merges in path order.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod collector;
pub mod merge;
pub mod pages;
pub mod pipeline;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use collector::CollectError;
pub use collector::ParameterCollector;
pub use merge::merge_maps;
pub use pages::MAX_PAGES_PER_PATH;
pub use pages::page_stream;
pub use pipeline::Pipeline;
pub use pipeline::PipelineError;
pub use pipeline::RunRequest;
pub use store::InMemoryParameterStore;
