// crates/ssm-env-core/src/core/naming.rs
// ============================================================================
// Module: Parameter Naming
// Description: Naming policy and the raw-name to identifier formatter.
// Purpose: Turn hierarchical parameter names into environment identifiers.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`format_name`] maps a raw hierarchical key to an environment identifier
//! under a [`NamingPolicy`]. The steps run in a fixed order and each one works
//! on the output of the previous step:
//! 1. `split_env`: keep only the last non-empty `/` segment; otherwise strip one leading
//!    `/` and replace the remaining `/` with `_`.
//! 2. `upper_case`: uppercase the whole result.
//! 3. `env_prefix`: prepend the prefix verbatim, without a separator.
//!
//! The formatter is total. A raw name that is empty or made only of `/` has an
//! empty base name (steps 1 and 2). [`format_base_name`] exposes that base so
//! callers can reject it before the prefix hides it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Naming Policy
// ============================================================================

/// Rules controlling how raw parameter names become identifiers.
///
/// # Invariants
/// - Every combination of fields is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPolicy {
    /// Keep only the last path segment, discarding the hierarchy.
    #[serde(default)]
    pub split_env: bool,
    /// Uppercase the formatted name.
    #[serde(default)]
    pub upper_case: bool,
    /// Prefix prepended verbatim to every formatted name.
    #[serde(default)]
    pub env_prefix: String,
}

impl NamingPolicy {
    /// Prepends `env_prefix` verbatim to a base name.
    #[must_use]
    pub fn prefixed(&self, mut base: String) -> String {
        if !self.env_prefix.is_empty() {
            base.insert_str(0, &self.env_prefix);
        }
        base
    }
}

// ============================================================================
// SECTION: Formatter
// ============================================================================

/// Formats a raw hierarchical name under the given policy.
///
/// ```
/// use ssm_env_core::NamingPolicy;
/// use ssm_env_core::format_name;
///
/// let policy = NamingPolicy {
///     split_env: false,
///     upper_case: true,
///     env_prefix: "P_".to_string(),
/// };
/// assert_eq!(format_name("/a/b", &policy), "P_A_B");
/// ```
#[must_use]
pub fn format_name(raw: &str, policy: &NamingPolicy) -> String {
    policy.prefixed(format_base_name(raw, policy))
}

/// Applies the split and case steps without the prefix.
#[must_use]
pub fn format_base_name(raw: &str, policy: &NamingPolicy) -> String {
    let formatted = if policy.split_env {
        raw.rsplit('/').find(|segment| !segment.is_empty()).unwrap_or_default().to_string()
    } else {
        raw.strip_prefix('/').unwrap_or(raw).replace('/', "_")
    };
    if policy.upper_case { formatted.to_uppercase() } else { formatted }
}
