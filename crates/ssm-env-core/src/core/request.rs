// crates/ssm-env-core/src/core/request.rs
// ============================================================================
// Module: Fetch Request
// Description: Per-path fetch parameters passed to the store.
// Purpose: Describe one path prefix query independent of the store client.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`FetchRequest`] carries the path prefix and the recursion and
//! decryption flags for every page of one path. The continuation token is
//! passed separately per call.

use serde::Deserialize;
use serde::Serialize;

/// Store query for all parameters beneath one path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Path prefix to query (for example `/app/`).
    pub path: String,
    /// Whether to include parameters nested below direct children.
    pub recursive: bool,
    /// Whether secure strings are returned decrypted.
    pub with_decryption: bool,
}

impl FetchRequest {
    /// Creates a fetch request for a path prefix.
    #[must_use]
    pub fn new(path: impl Into<String>, recursive: bool, with_decryption: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
            with_decryption,
        }
    }
}
