// crates/ssm-env-core/src/runtime/collector.rs
// ============================================================================
// Module: Parameter Collector
// Description: Per-path collection of formatted, trimmed parameters.
// Purpose: Drive pagination for one path and build its parameter map.
// Dependencies: crate::{core, interfaces}, futures, thiserror, tracing
// ============================================================================

//! ## Overview
//! [`ParameterCollector`] consumes [`page_stream`] for one
//! [`FetchRequest`] and, for every parameter in fetch order:
//! 1. trims the value,
//! 2. formats the name under the [`NamingPolicy`],
//! 3. registers secret values with the [`SecretRegistry`],
//! 4. inserts the entry, overwriting earlier entries with the same name.
//!
//! Invariants:
//! - A secret value is registered before it is stored anywhere.
//! - Registration happens once per fetched secret, even when the entry is
//!   later overwritten or skipped.
//! - Entries whose name is empty before the prefix is applied are skipped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::pin::pin;

use futures::TryStreamExt;
use thiserror::Error;
use tracing::debug;
use tracing::warn;

use crate::core::FetchRequest;
use crate::core::NamingPolicy;
use crate::core::Parameter;
use crate::core::ParameterMap;
use crate::core::format_base_name;
use crate::interfaces::FetchError;
use crate::interfaces::ParameterFetcher;
use crate::interfaces::SecretError;
use crate::interfaces::SecretRegistry;
use crate::runtime::pages::page_stream;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors that abort collection for a path.
#[derive(Debug, Error)]
pub enum CollectError {
    /// A store round-trip failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// A secret could not be registered for redaction.
    #[error(transparent)]
    Secret(#[from] SecretError),
}

// ============================================================================
// SECTION: Collector
// ============================================================================

/// Collects one path prefix into a [`ParameterMap`].
#[derive(Clone, Copy)]
pub struct ParameterCollector<'a> {
    /// Store client used for every page.
    fetcher: &'a dyn ParameterFetcher,
    /// Redaction mechanism shared by all collectors of a run.
    secrets: &'a dyn SecretRegistry,
    /// Naming rules applied to every raw name.
    policy: &'a NamingPolicy,
}

impl<'a> ParameterCollector<'a> {
    /// Creates a collector over borrowed collaborators.
    #[must_use]
    pub fn new(
        fetcher: &'a dyn ParameterFetcher,
        secrets: &'a dyn SecretRegistry,
        policy: &'a NamingPolicy,
    ) -> Self {
        Self {
            fetcher,
            secrets,
            policy,
        }
    }

    /// Fetches every page for the request and returns the path's map.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError`] on the first fetch or registration failure.
    pub async fn collect(&self, request: &FetchRequest) -> Result<ParameterMap, CollectError> {
        let mut map = ParameterMap::new();
        let mut pages = pin!(page_stream(self.fetcher, request));
        let mut page_count = 0_usize;
        while let Some(batch) = pages.try_next().await? {
            page_count += 1;
            debug!(path = %request.path, page = page_count, parameters = batch.len(), "fetched page");
            for parameter in batch {
                self.absorb(&mut map, &parameter)?;
            }
        }
        debug!(path = %request.path, pages = page_count, entries = map.len(), "collected path");
        Ok(map)
    }

    /// Formats, registers, and inserts a single parameter.
    fn absorb(&self, map: &mut ParameterMap, parameter: &Parameter) -> Result<(), CollectError> {
        let value = parameter.value.trim();
        let base = format_base_name(&parameter.name, self.policy);
        if parameter.is_secret() {
            self.secrets.register(value)?;
        }
        // The prefix alone is not a usable name.
        if base.is_empty() {
            warn!(raw_name = %parameter.name, "skipping parameter with empty formatted name");
            return Ok(());
        }
        map.insert(self.policy.prefixed(base), value);
        Ok(())
    }
}
