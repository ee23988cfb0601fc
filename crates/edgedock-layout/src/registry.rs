//! Active panel registry.
//!
//! The registry is the only mutable owned state of the engine: a map from
//! panel id to its current docking claim, plus the order panels registered
//! in. Order and overlap declarations live on the context and are re-read on
//! every derived computation; they are never stored here.

use edgedock_core::geometry::Edge;
use edgedock_core::id::PanelId;
use rustc_hash::FxHashMap;

/// A registered panel's current docking claim.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Panel {
    /// The edge the panel is pinned to.
    pub edge: Edge,
    /// Thickness along the edge's axis, in pixels.
    pub amount: f64,
}

/// Tracks the set of currently active panels and their registration order.
///
/// The last registration for an id wins *in place*: the entry is overwritten
/// but its position in registration order is preserved. Removal is
/// idempotent.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: FxHashMap<PanelId, Panel>,
    order: Vec<PanelId>,
}

impl PanelRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `id`.
    ///
    /// New ids are appended to the registration order; re-registration keeps
    /// the existing position.
    pub fn insert(&mut self, id: PanelId, edge: Edge, amount: f64) {
        if self.panels.insert(id.clone(), Panel { edge, amount }).is_none() {
            self.order.push(id);
        }
    }

    /// Remove `id` from the map and the registration order.
    ///
    /// Returns whether an entry was actually removed; removing an absent id
    /// is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.panels.remove(id).is_some() {
            self.order.retain(|registered| registered.as_str() != id);
            true
        } else {
            false
        }
    }

    /// The entry for `id`, if registered.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Panel> {
        self.panels.get(id)
    }

    /// Mutable access to the entry for `id`, if registered.
    #[inline]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Panel> {
        self.panels.get_mut(id)
    }

    /// Whether `id` is currently registered.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.panels.contains_key(id)
    }

    /// Panel ids in the order they first registered.
    #[inline]
    pub fn registration_order(&self) -> &[PanelId] {
        &self.order
    }

    /// Number of registered panels.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no panels are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&PanelId, &Panel)> {
        self.order
            .iter()
            .filter_map(|id| self.panels.get(id.as_str()).map(|panel| (id, panel)))
    }
}
