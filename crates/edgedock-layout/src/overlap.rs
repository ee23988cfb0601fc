//! Overlap resolution: paired panels cancel each other's inset contribution.
//!
//! An overlap declaration `"a:b"` makes the two panels share space instead
//! of stacking independently: `b`'s outer box is pushed inward by `a`'s
//! thickness on `a`'s edge, and `a`'s outer box is pulled outward by `b`'s
//! thickness on `b`'s edge. The shift applies during style projection only;
//! layer accumulation is untouched.

use edgedock_core::geometry::Edge;
use edgedock_core::id::PanelId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::registry::PanelRegistry;

/// Correction applied to one panel's outer insets before projection.
///
/// `amount` is signed: the pushed-inward side receives a positive shift, the
/// pulled-outward side a negative one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlapShift {
    /// The edge whose inset the shift is added to.
    pub edge: Edge,
    /// Signed shift in pixels.
    pub amount: f64,
}

/// Resolve declared overlap tokens into per-panel shifts.
///
/// Tokens are `"idA:idB"`; anything without a `:` is ignored. A pair is
/// active only while both ids are registered, otherwise neither side is
/// touched. When several pairs reference the same id, the last one wins
/// (overwrite, no accumulation).
pub fn resolve(overlaps: &[String], registry: &PanelRegistry) -> FxHashMap<PanelId, OverlapShift> {
    let mut shifts = FxHashMap::default();

    for token in overlaps {
        let mut parts = token.split(':');
        let (Some(first_id), Some(second_id)) = (parts.next(), parts.next()) else {
            continue;
        };
        let (Some(first), Some(second)) = (registry.get(first_id), registry.get(second_id)) else {
            continue;
        };

        shifts.insert(
            PanelId::from(second_id),
            OverlapShift {
                edge: first.edge,
                amount: first.amount,
            },
        );
        shifts.insert(
            PanelId::from(first_id),
            OverlapShift {
                edge: second.edge,
                amount: -second.amount,
            },
        );
    }

    shifts
}
