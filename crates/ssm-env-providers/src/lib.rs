// crates/ssm-env-providers/src/lib.rs
// ============================================================================
// Module: SSM Env Providers
// Description: Parameter store backends for the ssm-env pipeline.
// Purpose: Connect the core fetcher interface to AWS Systems Manager.
// Dependencies: ssm-env-core, ssm-env-config, aws-config, aws-sdk-ssm
// ============================================================================

//! ## Overview
//! This crate implements [`ssm_env_core::ParameterFetcher`] over the AWS
//! Systems Manager `GetParametersByPath` API. Retries, timeouts, and
//! credentials are left to the SDK's shared configuration.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod ssm;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use ssm::SsmParameterFetcher;
pub use ssm::convert_parameter;
