// crates/ssm-env-core/src/runtime/store.rs
// ============================================================================
// Module: In-Memory Parameter Store
// Description: Hierarchical, paginated parameter store held in memory.
// Purpose: Provide a deterministic fetcher for tests and offline runs.
// Dependencies: crate::{core, interfaces}, async-trait
// ============================================================================

//! ## Overview
//! [`InMemoryParameterStore`] mirrors the path semantics of a hierarchical
//! parameter store: a path prefix matches direct children, or every
//! descendant when the request is recursive. Results are returned in name
//! order, `page_size` at a time, with the offset encoded as the continuation
//! token. Paths can be configured to fail to exercise error handling.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::FetchRequest;
use crate::core::Parameter;
use crate::core::ParameterPage;
use crate::interfaces::FetchError;
use crate::interfaces::ParameterFetcher;

// ============================================================================
// SECTION: Store
// ============================================================================

/// In-memory parameter store for tests and offline runs.
///
/// # Invariants
/// - `page_size` is at least 1.
/// - Parameters are unique by raw name; re-inserting a name replaces it.
#[derive(Debug)]
pub struct InMemoryParameterStore {
    /// Parameters keyed by raw hierarchical name.
    parameters: BTreeMap<String, Parameter>,
    /// Maximum parameters returned per page.
    page_size: usize,
    /// Path prefixes that fail with the given message.
    failures: BTreeMap<String, String>,
    /// Recorded `(path, token)` pairs, in call order.
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl Default for InMemoryParameterStore {
    fn default() -> Self {
        Self::new(10)
    }
}

impl InMemoryParameterStore {
    /// Creates an empty store returning at most `page_size` parameters per page.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            parameters: BTreeMap::new(),
            page_size: page_size.max(1),
            failures: BTreeMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Adds a parameter, replacing any parameter with the same name.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.insert(parameter.name.clone(), parameter);
        self
    }

    /// Makes every fetch for `path` fail with a store error.
    #[must_use]
    pub fn with_failure(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(path.into(), message.into());
        self
    }

    /// Returns the recorded `(path, token)` fetch calls in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Returns the parameters visible under a request, in name order.
    fn matching(&self, request: &FetchRequest) -> Vec<&Parameter> {
        let prefix = if request.path.ends_with('/') {
            request.path.clone()
        } else {
            format!("{}/", request.path)
        };
        self.parameters
            .values()
            .filter(|parameter| {
                parameter.name.strip_prefix(&prefix).is_some_and(|rest| {
                    !rest.is_empty() && (request.recursive || !rest.contains('/'))
                })
            })
            .collect()
    }
}

#[async_trait]
impl ParameterFetcher for InMemoryParameterStore {
    async fn fetch_page(
        &self,
        request: &FetchRequest,
        token: Option<&str>,
    ) -> Result<ParameterPage, FetchError> {
        self.calls
            .lock()
            .map_err(|_| FetchError::Store("parameter store mutex poisoned".to_string()))?
            .push((request.path.clone(), token.map(ToString::to_string)));
        if let Some(message) = self.failures.get(&request.path) {
            return Err(FetchError::Store(message.clone()));
        }
        let offset = match token {
            None => 0,
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| FetchError::Store(format!("invalid pagination token: {token}")))?,
        };
        let matching = self.matching(request);
        let parameters: Vec<Parameter> =
            matching.iter().skip(offset).take(self.page_size).map(|p| (*p).clone()).collect();
        let end = offset.saturating_add(self.page_size);
        let next_token = (end < matching.len()).then(|| end.to_string());
        Ok(ParameterPage::new(parameters, next_token))
    }
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use super::InMemoryParameterStore;
    use crate::core::FetchRequest;
    use crate::core::Parameter;
    use crate::core::ParameterKind;
    use crate::interfaces::ParameterFetcher;

    fn store() -> InMemoryParameterStore {
        InMemoryParameterStore::new(2)
            .with_parameter(Parameter::new("/app/a", "1", ParameterKind::String))
            .with_parameter(Parameter::new("/app/b", "2", ParameterKind::String))
            .with_parameter(Parameter::new("/app/c", "3", ParameterKind::String))
            .with_parameter(Parameter::new("/app/nested/d", "4", ParameterKind::String))
            .with_parameter(Parameter::new("/apple/e", "5", ParameterKind::String))
    }

    #[tokio::test]
    async fn non_recursive_fetch_returns_direct_children_in_pages() {
        let store = store();
        let request = FetchRequest::new("/app", false, false);

        let first = store.fetch_page(&request, None).await.unwrap();
        assert_eq!(first.parameters.len(), 2);
        assert_eq!(first.next_token.as_deref(), Some("2"));

        let second = store.fetch_page(&request, Some("2")).await.unwrap();
        assert_eq!(second.parameters.len(), 1);
        assert_eq!(second.parameters[0].name, "/app/c");
        assert_eq!(second.next_token, None);
    }

    #[tokio::test]
    async fn recursive_fetch_includes_descendants_but_not_siblings() {
        let store = InMemoryParameterStore::new(10)
            .with_parameter(Parameter::new("/app/nested/d", "4", ParameterKind::String))
            .with_parameter(Parameter::new("/apple/e", "5", ParameterKind::String));
        let request = FetchRequest::new("/app/", true, false);

        let page = store.fetch_page(&request, None).await.unwrap();

        let names: Vec<&str> = page.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["/app/nested/d"]);
    }

    #[tokio::test]
    async fn configured_failure_is_returned_and_recorded() {
        let store = store().with_failure("/broken", "access denied");
        let request = FetchRequest::new("/broken", false, false);

        let err = store.fetch_page(&request, None).await.unwrap_err();

        assert!(err.to_string().contains("access denied"));
        assert_eq!(store.calls(), vec![("/broken".to_string(), None)]);
    }
}
