// crates/ssm-env-core/tests/common/mod.rs
// ============================================================================
// Module: Core Test Support
// Description: Scripted fetchers and recording registries for core tests.
// Purpose: Drive collectors and pipelines through deterministic fixtures.
// Dependencies: ssm-env-core, async-trait, tokio
// ============================================================================

#![allow(dead_code, reason = "Shared helpers are not used by every test crate.")]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use ssm_env_core::FetchError;
use ssm_env_core::FetchRequest;
use ssm_env_core::Parameter;
use ssm_env_core::ParameterFetcher;
use ssm_env_core::ParameterKind;
use ssm_env_core::ParameterPage;
use ssm_env_core::SecretError;
use ssm_env_core::SecretRegistry;

/// Shared, ordered event log for fetch and registration calls.
pub type EventLog = Arc<Mutex<Vec<String>>>;

/// Creates an empty event log.
pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Returns a snapshot of the event log.
pub fn events(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Builds a plain string parameter.
pub fn plain(name: &str, value: &str) -> Parameter {
    Parameter::new(name, value, ParameterKind::String)
}

/// Builds a secure string parameter.
pub fn secure(name: &str, value: &str) -> Parameter {
    Parameter::new(name, value, ParameterKind::SecureString)
}

/// Pages and behavior scripted for a single path.
#[derive(Default)]
pub struct PathScript {
    /// Pages keyed by the token that requests them (`None` for the first page).
    pages: BTreeMap<Option<String>, ParameterPage>,
    /// Delay applied before every response.
    delay: Duration,
    /// Failure returned for every call.
    failure: Option<String>,
}

impl PathScript {
    /// Adds the page served for `token`.
    pub fn page(
        mut self,
        token: Option<&str>,
        parameters: Vec<Parameter>,
        next: Option<&str>,
    ) -> Self {
        self.pages.insert(
            token.map(ToString::to_string),
            ParameterPage::new(parameters, next.map(ToString::to_string)),
        );
        self
    }

    /// Delays every response for this path.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fails every call for this path.
    pub fn fail(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

/// Fetcher whose every page carries the same raw continuation token.
///
/// Pages are built as struct literals so the token reaches the page stream
/// without the normalization done by [`ParameterPage::new`].
pub struct RepeatingTokenFetcher {
    /// Token returned with every page.
    token: String,
    /// Number of fetch calls served.
    calls: AtomicUsize,
}

impl RepeatingTokenFetcher {
    /// Creates a fetcher returning `token` on every page.
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetch calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ParameterFetcher for RepeatingTokenFetcher {
    async fn fetch_page(
        &self,
        request: &FetchRequest,
        _token: Option<&str>,
    ) -> Result<ParameterPage, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ParameterPage {
            parameters: vec![plain(&format!("{}/P{call}", request.path), "v")],
            next_token: Some(self.token.clone()),
        })
    }
}

/// Fetcher that serves scripted pages per path and logs every call.
pub struct ScriptedFetcher {
    /// Scripts keyed by path prefix.
    scripts: BTreeMap<String, PathScript>,
    /// Shared event log.
    log: EventLog,
}

impl ScriptedFetcher {
    /// Creates a fetcher writing to `log`.
    pub fn new(log: EventLog) -> Self {
        Self {
            scripts: BTreeMap::new(),
            log,
        }
    }

    /// Adds the script for a path.
    pub fn path(mut self, path: &str, script: PathScript) -> Self {
        self.scripts.insert(path.to_string(), script);
        self
    }

    /// Number of fetch calls recorded for `path`.
    pub fn calls_for(&self, path: &str) -> usize {
        let needle = format!("fetch {path} ");
        self.log.lock().unwrap().iter().filter(|event| event.starts_with(&needle)).count()
    }
}

#[async_trait]
impl ParameterFetcher for ScriptedFetcher {
    async fn fetch_page(
        &self,
        request: &FetchRequest,
        token: Option<&str>,
    ) -> Result<ParameterPage, FetchError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("fetch {} {}", request.path, token.unwrap_or("-")));
        let script = self
            .scripts
            .get(&request.path)
            .ok_or_else(|| FetchError::Store(format!("no script for {}", request.path)))?;
        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }
        if let Some(message) = &script.failure {
            return Err(FetchError::Store(message.clone()));
        }
        script
            .pages
            .get(&token.map(ToString::to_string))
            .cloned()
            .ok_or_else(|| FetchError::Store(format!("unexpected token {token:?}")))
    }
}

/// Registry that records secrets into the shared event log.
pub struct RecordingRegistry {
    /// Shared event log.
    log: EventLog,
    /// Registered values in call order.
    values: Mutex<Vec<String>>,
    /// When set, every registration fails.
    fail: bool,
}

impl RecordingRegistry {
    /// Creates a registry writing to `log`.
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            values: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Creates a registry that rejects every value.
    pub fn failing(log: EventLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }

    /// Registered values in call order.
    pub fn values(&self) -> Vec<String> {
        self.values.lock().unwrap().clone()
    }
}

impl SecretRegistry for RecordingRegistry {
    fn register(&self, value: &str) -> Result<(), SecretError> {
        if self.fail {
            return Err(SecretError::RegistrationFailed("registry offline".to_string()));
        }
        self.log.lock().unwrap().push(format!("register {value}"));
        self.values.lock().unwrap().push(value.to_string());
        Ok(())
    }
}
