// crates/ssm-env-core/src/core/parameter.rs
// ============================================================================
// Module: Parameter Model
// Description: Parameter records and pagination pages returned by the store.
// Purpose: Represent fetched parameters independently of the store client.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Parameter`] is a single hierarchical key/value pair as returned by the
//! store. Parameters are immutable once fetched; collectors read them and never
//! write back. A [`ParameterPage`] is the result of one store round-trip.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Parameter Kind
// ============================================================================

/// Store-reported parameter type.
///
/// # Invariants
/// - Only [`ParameterKind::SecureString`] values are secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Plain string value.
    String,
    /// Comma-separated list of strings.
    StringList,
    /// Encrypted string value.
    SecureString,
    /// Type label not known to this crate.
    Other(String),
}

impl ParameterKind {
    /// Parses a store type label (`String`, `StringList`, `SecureString`).
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "String" => Self::String,
            "StringList" => Self::StringList,
            "SecureString" => Self::SecureString,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the store type label.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            Self::String => "String",
            Self::StringList => "StringList",
            Self::SecureString => "SecureString",
            Self::Other(label) => label,
        }
    }

    /// Returns true when values of this kind must be redacted.
    #[must_use]
    pub const fn is_secret(&self) -> bool {
        matches!(self, Self::SecureString)
    }
}

// ============================================================================
// SECTION: Parameter
// ============================================================================

/// A single parameter fetched from the store.
///
/// # Invariants
/// - `name` is the raw hierarchical path, never a formatted name.
/// - `value` is untrimmed exactly as the store returned it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Raw hierarchical name (for example `/app/db/password`).
    pub name: String,
    /// Raw parameter value.
    pub value: String,
    /// Store-reported parameter type.
    pub kind: ParameterKind,
}

impl Parameter {
    /// Creates a parameter from its raw parts.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }

    /// Returns true when the value must be registered for redaction.
    #[must_use]
    pub const fn is_secret(&self) -> bool {
        self.kind.is_secret()
    }
}

impl std::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = if self.is_secret() { "<redacted>" } else { self.value.as_str() };
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("value", &value)
            .field("kind", &self.kind)
            .finish()
    }
}

// ============================================================================
// SECTION: Parameter Page
// ============================================================================

/// One batch of parameters returned by a single store round-trip.
///
/// # Invariants
/// - `next_token` is `None` on the final page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    /// Parameters in store order.
    pub parameters: Vec<Parameter>,
    /// Continuation token for the next page.
    pub next_token: Option<String>,
}

impl ParameterPage {
    /// Creates a page from parameters and an optional continuation token.
    ///
    /// Empty tokens are normalized to `None`.
    #[must_use]
    pub fn new(parameters: Vec<Parameter>, next_token: Option<String>) -> Self {
        Self {
            parameters,
            next_token: next_token.filter(|token| !token.is_empty()),
        }
    }
}
