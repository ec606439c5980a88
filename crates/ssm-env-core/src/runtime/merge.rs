// crates/ssm-env-core/src/runtime/merge.rs
// ============================================================================
// Module: Parameter Map Merge
// Description: Right-biased merge over an ordered sequence of maps.
// Purpose: Make the cross-path conflict policy an explicit contract.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! [`merge_maps`] folds per-path maps left to right. Conflict resolution
//! depends only on sequence order, never on collection timing.

use crate::core::ParameterMap;

/// Merges maps in sequence order; later maps win on name collision.
///
/// The order of `maps` is the only input to conflict resolution, so callers
/// must pass maps in the order their paths were supplied, not the order their
/// collections finished. Collisions are silent: a path can shadow an earlier
/// path's entry, most often when `split_env` discards the hierarchy.
#[must_use]
pub fn merge_maps<I>(maps: I) -> ParameterMap
where
    I: IntoIterator<Item = ParameterMap>,
{
    maps.into_iter().fold(ParameterMap::new(), |mut merged, map| {
        merged.absorb(map);
        merged
    })
}
