// crates/ssm-env-core/src/core/mod.rs
// ============================================================================
// Module: SSM Env Core Types
// Description: Canonical parameter, request, policy, and map structures.
// Purpose: Provide stable types shared by fetchers, collectors, and sinks.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types describe what the store returns ([`Parameter`],
//! [`ParameterPage`]), what a collector asks for ([`FetchRequest`]), how names
//! are normalized ([`NamingPolicy`]), and what a run produces
//! ([`ParameterMap`]).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod map;
pub mod naming;
pub mod parameter;
pub mod request;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use map::ParameterMap;
pub use naming::NamingPolicy;
pub use naming::format_base_name;
pub use naming::format_name;
pub use parameter::Parameter;
pub use parameter::ParameterKind;
pub use parameter::ParameterPage;
pub use request::FetchRequest;
