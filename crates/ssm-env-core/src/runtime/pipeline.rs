// crates/ssm-env-core/src/runtime/pipeline.rs
// ============================================================================
// Module: Collection Pipeline
// Description: Concurrent per-path collection joined into one merged map.
// Purpose: Orchestrate collectors, merge deterministically, and export.
// Dependencies: crate::{core, interfaces, runtime}, futures, thiserror, tracing
// ============================================================================

//! ## Overview
//! [`Pipeline`] issues one [`ParameterCollector`] per path and drives them
//! concurrently with an all-or-nothing join. Results are merged in the order
//! the paths were supplied, so the right-biased merge is deterministic no
//! matter which collector finishes first.
//! Invariants:
//! - Any collector failure fails the whole run; no partial map is returned.
//! - The sink is only reached after every path succeeded.
//! - Secret registrations made before a failure are not rolled back.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use futures::future::try_join_all;
use thiserror::Error;
use tracing::info;

use crate::core::FetchRequest;
use crate::core::NamingPolicy;
use crate::core::ParameterMap;
use crate::interfaces::EnvironmentSink;
use crate::interfaces::ParameterFetcher;
use crate::interfaces::SecretRegistry;
use crate::interfaces::SinkError;
use crate::runtime::collector::CollectError;
use crate::runtime::collector::ParameterCollector;
use crate::runtime::merge::merge_maps;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors that abort a pipeline run.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The run was started without any path prefixes.
    #[error("no parameter paths were provided")]
    NoPaths,
    /// Collection failed for one of the paths.
    #[error("failed to collect parameters under {path}: {source}")]
    Collect {
        /// Path prefix whose collection failed.
        path: String,
        /// Underlying collection failure.
        #[source]
        source: CollectError,
    },
    /// The merged map could not be exported.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

// ============================================================================
// SECTION: Run Request
// ============================================================================

/// Inputs for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
    /// Path prefixes in caller order; later paths win merge conflicts.
    pub paths: Vec<String>,
    /// Whether nested parameters are included.
    pub recursive: bool,
    /// Whether secure strings are decrypted.
    pub with_decryption: bool,
}

impl RunRequest {
    /// Builds the per-path fetch requests in caller order.
    #[must_use]
    pub fn fetch_requests(&self) -> Vec<FetchRequest> {
        self.paths
            .iter()
            .map(|path| FetchRequest::new(path.clone(), self.recursive, self.with_decryption))
            .collect()
    }
}

// ============================================================================
// SECTION: Pipeline
// ============================================================================

/// Orchestrates collection, merge, and export for a set of paths.
pub struct Pipeline {
    /// Store client shared by every collector.
    fetcher: Arc<dyn ParameterFetcher>,
    /// Redaction mechanism shared by every collector.
    secrets: Arc<dyn SecretRegistry>,
    /// Naming rules for the run.
    policy: NamingPolicy,
}

impl Pipeline {
    /// Creates a pipeline over the given collaborators.
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn ParameterFetcher>,
        secrets: Arc<dyn SecretRegistry>,
        policy: NamingPolicy,
    ) -> Self {
        Self {
            fetcher,
            secrets,
            policy,
        }
    }

    /// Returns the naming policy applied by this pipeline.
    #[must_use]
    pub const fn policy(&self) -> &NamingPolicy {
        &self.policy
    }

    /// Collects every path concurrently and merges the results in path order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NoPaths`] for an empty path list and
    /// [`PipelineError::Collect`] for the first path that fails.
    pub async fn run(&self, request: &RunRequest) -> Result<ParameterMap, PipelineError> {
        if request.paths.is_empty() {
            return Err(PipelineError::NoPaths);
        }
        let collector =
            ParameterCollector::new(self.fetcher.as_ref(), self.secrets.as_ref(), &self.policy);
        let collections = request.fetch_requests().into_iter().map(|fetch| async move {
            collector.collect(&fetch).await.map_err(|source| PipelineError::Collect {
                path: fetch.path.clone(),
                source,
            })
        });
        let maps = try_join_all(collections).await?;
        let merged = merge_maps(maps);
        info!(paths = request.paths.len(), variables = merged.len(), "merged parameter maps");
        Ok(merged)
    }

    /// Runs the pipeline and exports the merged map into `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] when collection or export fails. The sink is
    /// not called when collection fails.
    pub async fn run_into(
        &self,
        request: &RunRequest,
        sink: &dyn EnvironmentSink,
    ) -> Result<ParameterMap, PipelineError> {
        let merged = self.run(request).await?;
        sink.export(&merged)?;
        info!(variables = merged.len(), "exported parameters");
        Ok(merged)
    }
}
