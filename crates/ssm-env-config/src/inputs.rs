// crates/ssm-env-config/src/inputs.rs
// ============================================================================
// Module: Action Inputs
// Description: Reads GitHub Action inputs from `INPUT_<NAME>` variables.
// Purpose: Accept the same inputs as the published action definition.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The runner passes each action input as an environment variable named
//! `INPUT_<NAME>`, where the name is uppercased and spaces become `_` (hyphens
//! are kept). Values are trimmed; empty values count as absent.
//!
//! Boolean inputs are true only for the exact string `true`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Action input names understood by the tool.
pub const INPUT_NAMES: [&str; 7] = [
    "paths",
    "recursive",
    "output-type",
    "with-decryption",
    "split-env",
    "upper-case",
    "env-prefix",
];

// ============================================================================
// SECTION: Parsing Helpers
// ============================================================================

/// Returns the environment variable carrying the action input `name`.
///
/// ```
/// assert_eq!(ssm_env_config::input_variable("with-decryption"), "INPUT_WITH-DECRYPTION");
/// ```
#[must_use]
pub fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Returns true only for the exact string `true`.
#[must_use]
pub fn is_true(value: &str) -> bool {
    value == "true"
}

/// Splits a multi-line path input into trimmed, non-empty paths.
///
/// ```
/// let paths = ssm_env_config::parse_paths("/a\n\n  /b  \n");
/// assert_eq!(paths, vec!["/a".to_string(), "/b".to_string()]);
/// ```
#[must_use]
pub fn parse_paths(raw: &str) -> Vec<String> {
    raw.split('\n').map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect()
}

// ============================================================================
// SECTION: Action Inputs
// ============================================================================

/// Snapshot of the action inputs that were provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInputs {
    /// Non-empty trimmed values keyed by input name.
    values: BTreeMap<String, String>,
}

impl ActionInputs {
    /// Reads every known input from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|variable| env::var(variable).ok())
    }

    /// Reads every known input through `lookup`, keyed by variable name.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let values = INPUT_NAMES
            .iter()
            .filter_map(|name| {
                let value = lookup(&input_variable(name))?;
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(((*name).to_string(), trimmed.to_string()))
                }
            })
            .collect();
        Self {
            values,
        }
    }

    /// Returns the trimmed value of an input, if provided.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns a boolean input, if provided.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).map(is_true)
    }

    /// Returns true when no input was provided.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
