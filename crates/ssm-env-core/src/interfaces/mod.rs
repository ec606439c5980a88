// crates/ssm-env-core/src/interfaces/mod.rs
// ============================================================================
// Module: SSM Env Interfaces
// Description: Backend-agnostic interfaces for the store, redaction, and export.
// Purpose: Define the contract surfaces used by the collection runtime.
// Dependencies: crate::core, async-trait, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the runtime reaches external systems without
//! embedding backend-specific details:
//! - [`ParameterFetcher`] performs one paginated store round-trip.
//! - [`SecretRegistry`] registers secret values for redaction before use.
//! - [`EnvironmentSink`] exports the final map into a process environment.
//!
//! Implementations must fail closed: an error aborts the whole run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;

use crate::core::FetchRequest;
use crate::core::ParameterMap;
use crate::core::ParameterPage;

// ============================================================================
// SECTION: Parameter Fetcher
// ============================================================================

/// Store errors raised while fetching a page.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Messages never include parameter values.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The store rejected or failed the request.
    #[error("parameter store request failed: {0}")]
    Store(String),
    /// The store returned a record that cannot be interpreted.
    #[error("parameter store returned a malformed record: {0}")]
    Malformed(String),
    /// Pagination did not terminate within the configured limit.
    #[error("pagination for {path} exceeded {max_pages} pages")]
    PageLimit {
        /// Path prefix being fetched.
        path: String,
        /// Maximum pages allowed per path.
        max_pages: usize,
    },
}

/// Fetches parameter pages from a hierarchical store.
///
/// Each call is a single round-trip. Fetchers do not retry; failures propagate
/// to the caller.
#[async_trait]
pub trait ParameterFetcher: Send + Sync {
    /// Fetches the page identified by `token` (`None` for the first page).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the store request fails.
    async fn fetch_page(
        &self,
        request: &FetchRequest,
        token: Option<&str>,
    ) -> Result<ParameterPage, FetchError>;
}

// ============================================================================
// SECTION: Secret Registry
// ============================================================================

/// Secret registration errors.
///
/// # Invariants
/// - Messages never include the secret value.
#[derive(Debug, Error)]
pub enum SecretError {
    /// The redaction mechanism could not record the secret.
    #[error("secret registration failed: {0}")]
    RegistrationFailed(String),
}

/// Redaction mechanism that must learn secret values before they are used.
///
/// Registration is irreversible and must be safe under concurrent calls from
/// several collectors.
pub trait SecretRegistry: Send + Sync {
    /// Registers a secret value for redaction.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError`] when the value could not be registered.
    fn register(&self, value: &str) -> Result<(), SecretError>;
}

// ============================================================================
// SECTION: Environment Sink
// ============================================================================

/// Export errors for environment sinks.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum SinkError {
    /// A name or value cannot be represented by the sink.
    #[error("cannot export {name}: {reason}")]
    InvalidVariable {
        /// Formatted variable name.
        name: String,
        /// Why the variable was rejected.
        reason: String,
    },
    /// Writing to the sink target failed.
    #[error("environment export failed: {0}")]
    WriteFailed(String),
}

/// Destination for the merged parameter map.
pub trait EnvironmentSink: Send + Sync {
    /// Exports every entry of the map.
    ///
    /// Implementations validate all entries before writing any of them.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when any entry cannot be exported.
    fn export(&self, variables: &ParameterMap) -> Result<(), SinkError>;
}
