// crates/ssm-env-broker/src/secret/mod.rs
// ============================================================================
// Module: SSM Env Secret Registries
// Description: Secret registry implementations for runner masking and redaction.
// Purpose: Ensure secret values never reach logs once they have been fetched.
// Dependencies: ssm-env-core, std
// ============================================================================

//! ## Overview
//! Registries implement [`ssm_env_core::SecretRegistry`]:
//! - [`WorkflowCommandMasker`] tells the runner to mask a value in job logs.
//! - [`SecretLedger`] keeps the values so this process can redact its own
//!   diagnostics.
//! - [`FanoutRegistry`] registers each value with several registries in order.
//!
//! Registration is irreversible. Empty values are ignored because there is
//! nothing to mask.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use ssm_env_core::SecretError;
use ssm_env_core::SecretRegistry;

use crate::command::format_command;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Replacement text for redacted secrets.
pub const REDACTED: &str = "***";

// ============================================================================
// SECTION: Workflow Command Masker
// ============================================================================

/// Registry emitting `::add-mask::` workflow commands.
pub struct WorkflowCommandMasker<W: Write + Send> {
    /// Output writer for command lines.
    writer: Mutex<W>,
}

impl<W: Write + Send> WorkflowCommandMasker<W> {
    /// Creates a masker writing commands to `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> SecretRegistry for WorkflowCommandMasker<W> {
    fn register(&self, value: &str) -> Result<(), SecretError> {
        if value.is_empty() {
            return Ok(());
        }
        let line = format_command("add-mask", &[], value);
        let mut guard = self.writer.lock().map_err(|_| {
            SecretError::RegistrationFailed("mask writer mutex poisoned".to_string())
        })?;
        writeln!(guard, "{line}")
            .and_then(|()| guard.flush())
            .map_err(|err| SecretError::RegistrationFailed(err.to_string()))?;
        drop(guard);
        Ok(())
    }
}

// ============================================================================
// SECTION: Secret Ledger
// ============================================================================

/// Registry remembering secret values for local redaction.
#[derive(Default)]
pub struct SecretLedger {
    /// Registered secret values.
    secrets: Mutex<BTreeSet<String>>,
}

impl SecretLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct registered secrets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.secrets.lock().map(|guard| guard.len()).unwrap_or_default()
    }

    /// Returns true when no secret has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces every registered secret in `text` with [`REDACTED`].
    ///
    /// Longer secrets are replaced first so a secret that contains another
    /// is never partially revealed.
    #[must_use]
    pub fn redact(&self, text: &str) -> String {
        let Ok(guard) = self.secrets.lock() else {
            return REDACTED.to_string();
        };
        let mut secrets: Vec<&String> = guard.iter().collect();
        secrets.sort_by(|left, right| right.len().cmp(&left.len()).then_with(|| left.cmp(right)));
        let mut redacted = text.to_string();
        for secret in secrets {
            if redacted.contains(secret.as_str()) {
                redacted = redacted.replace(secret.as_str(), REDACTED);
            }
        }
        redacted
    }
}

impl std::fmt::Debug for SecretLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretLedger").field("secrets", &self.len()).finish()
    }
}

impl SecretRegistry for SecretLedger {
    fn register(&self, value: &str) -> Result<(), SecretError> {
        if value.is_empty() {
            return Ok(());
        }
        self.secrets
            .lock()
            .map_err(|_| SecretError::RegistrationFailed("secret ledger mutex poisoned".to_string()))?
            .insert(value.to_string());
        Ok(())
    }
}

// ============================================================================
// SECTION: Fanout Registry
// ============================================================================

/// Registry forwarding each value to several registries in order.
///
/// # Invariants
/// - Registration stops at the first failing registry.
#[derive(Default)]
pub struct FanoutRegistry {
    /// Registries in registration order.
    registries: Vec<Arc<dyn SecretRegistry>>,
}

impl FanoutRegistry {
    /// Creates an empty fanout registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a registry.
    #[must_use]
    pub fn with(mut self, registry: Arc<dyn SecretRegistry>) -> Self {
        self.registries.push(registry);
        self
    }
}

impl SecretRegistry for FanoutRegistry {
    fn register(&self, value: &str) -> Result<(), SecretError> {
        for registry in &self.registries {
            registry.register(value)?;
        }
        Ok(())
    }
}
