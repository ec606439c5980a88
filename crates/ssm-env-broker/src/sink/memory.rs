// crates/ssm-env-broker/src/sink/memory.rs
// ============================================================================
// Module: Memory Sink
// Description: In-memory environment sink.
// Purpose: Capture exports in memory for tests and embedding callers.
// Dependencies: ssm-env-core, std
// ============================================================================

//! ## Overview
//! [`MemorySink`] validates names like the runner sinks and then absorbs the
//! map into its own, so repeated exports accumulate with later values
//! winning.

use std::sync::Mutex;

use ssm_env_core::EnvironmentSink;
use ssm_env_core::ParameterMap;
use ssm_env_core::SinkError;

use crate::sink::validate_name;

/// Sink accumulating every exported variable in memory.
///
/// # Invariants
/// - Later exports overwrite earlier values with the same name.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Exported variables.
    variables: Mutex<ParameterMap>,
}

impl MemorySink {
    /// Creates an empty memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything exported so far.
    #[must_use]
    pub fn snapshot(&self) -> ParameterMap {
        self.variables.lock().map(|guard| guard.clone()).unwrap_or_default()
    }
}

impl EnvironmentSink for MemorySink {
    fn export(&self, variables: &ParameterMap) -> Result<(), SinkError> {
        for name in variables.names() {
            validate_name(name)?;
        }
        self.variables
            .lock()
            .map_err(|_| SinkError::WriteFailed("memory sink mutex poisoned".to_string()))?
            .absorb(variables.clone());
        Ok(())
    }
}
