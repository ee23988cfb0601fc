//! Layout context: registration, live style views, and content padding.
//!
//! [`DockLayout`] is constructed once per layout tree and handed by
//! reference to every panel and the content collaborator; there is no
//! ambient global lookup. Derived state (layers, overlap shifts, styles,
//! padding) is pull-based: reads consult a generation-tagged memo that every
//! mutation invalidates in O(1), so consumers always observe a consistent
//! post-update view without any push machinery.
//!
//! # Handles
//!
//! [`StyleView`] (per panel) and [`ContentView`] (content area) hold weak
//! references to the shared state. Once the `DockLayout` is dropped, any
//! read through a surviving handle fails with
//! [`LayoutError::NoLayoutContext`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use edgedock_core::geometry::{Edge, Insets};
use edgedock_core::id::PanelId;
use rustc_hash::FxHashMap;

use crate::error::LayoutError;
use crate::layers::{self, Layer};
use crate::overlap::{self, OverlapShift};
use crate::registry::PanelRegistry;
use crate::snapshot::{LayoutSnapshot, PanelRecord, SnapshotError};
use crate::style::{self, PanelStyle};

/// Derived layout state, memoized per generation.
#[derive(Debug, Default)]
struct DerivedState {
    /// Generation this memo was computed at; stale when it trails the
    /// context generation.
    generation: u64,
    layers: Vec<Layer>,
    shifts: FxHashMap<PanelId, OverlapShift>,
}

#[derive(Debug)]
struct LayoutState {
    registry: PanelRegistry,
    order: Vec<String>,
    overlaps: Vec<String>,
    /// Bumped on every mutation.
    generation: u64,
    derived: DerivedState,
    hits: u64,
    misses: u64,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            registry: PanelRegistry::new(),
            order: Vec::new(),
            overlaps: Vec::new(),
            // Starts one ahead of the derived memo so the first read computes.
            generation: 1,
            derived: DerivedState::default(),
            hits: 0,
            misses: 0,
        }
    }
}

impl LayoutState {
    #[inline]
    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Recompute the derived memo when its generation is stale.
    fn refresh(&mut self) {
        if self.derived.generation == self.generation {
            self.hits += 1;
            return;
        }
        self.misses += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            generation = self.generation,
            panels = self.registry.len(),
            "derived layout recomputed"
        );
        self.derived = DerivedState {
            generation: self.generation,
            layers: layers::accumulate(&self.order, &self.registry),
            shifts: overlap::resolve(&self.overlaps, &self.registry),
        };
    }
}

/// Statistics about the context's derived-state memo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutStats {
    /// Currently registered panels.
    pub panels: usize,
    /// Reads served from the memoized derived state.
    pub hits: u64,
    /// Reads that recomputed layers and overlap shifts.
    pub misses: u64,
    /// Hit rate as a fraction (0.0 to 1.0).
    pub hit_rate: f64,
}

/// Per-tree docking context.
///
/// Owns the panel registry and the externally supplied order/overlap
/// configuration, and wires the accumulator, resolver, and projector behind
/// the registration API. Single-threaded by construction (`Rc`-shared
/// state); a host that parallelizes reads wraps the context in its own lock.
#[derive(Debug, Default)]
pub struct DockLayout {
    state: Rc<RefCell<LayoutState>>,
}

impl DockLayout {
    /// Create an empty layout context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with initial order and overlap configuration.
    #[must_use]
    pub fn with_config(order: Vec<String>, overlaps: Vec<String>) -> Self {
        let layout = Self::new();
        {
            let mut state = layout.state.borrow_mut();
            state.order = order;
            state.overlaps = overlaps;
        }
        layout
    }

    /// Register a panel, returning its live style view.
    ///
    /// Re-registering an id overwrites the entry in place; its position in
    /// registration order is preserved.
    pub fn register(&self, id: impl Into<PanelId>, edge: Edge, amount: f64) -> StyleView {
        let id = id.into();
        let mut state = self.state.borrow_mut();
        #[cfg(feature = "tracing")]
        tracing::trace!(id = %id, edge = %edge, amount, "panel registered");
        state.registry.insert(id.clone(), edge, amount);
        state.invalidate();
        StyleView {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    /// Unregister a panel. Unregistering an unknown id is a no-op.
    pub fn unregister(&self, id: &str) {
        let mut state = self.state.borrow_mut();
        if state.registry.remove(id) {
            #[cfg(feature = "tracing")]
            tracing::trace!(id, "panel unregistered");
            state.invalidate();
        }
    }

    /// Replace the external order tokens (`"id"` or `"id:extra"`).
    pub fn set_order(&self, order: Vec<String>) {
        let mut state = self.state.borrow_mut();
        state.order = order;
        state.invalidate();
    }

    /// Replace the external overlap tokens (`"idA:idB"`).
    pub fn set_overlaps(&self, overlaps: Vec<String>) {
        let mut state = self.state.borrow_mut();
        state.overlaps = overlaps;
        state.invalidate();
    }

    /// The final layer's insets: the space content must leave clear of all
    /// docked panels.
    pub fn padding(&self) -> Insets {
        let mut state = self.state.borrow_mut();
        state.refresh();
        state
            .derived
            .layers
            .last()
            .map_or(Insets::ZERO, |layer| layer.insets)
    }

    /// Content padding as the CSS shorthand
    /// `"<top>px <right>px <bottom>px <left>px"`.
    pub fn padding_css(&self) -> String {
        self.padding().to_string()
    }

    /// Snapshot of the current layer sequence, base layer first.
    pub fn layers(&self) -> Vec<Layer> {
        let mut state = self.state.borrow_mut();
        state.refresh();
        state.derived.layers.clone()
    }

    /// Handle for the content collaborator.
    #[must_use]
    pub fn content_view(&self) -> ContentView {
        ContentView {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Memo statistics for this context.
    pub fn stats(&self) -> LayoutStats {
        let state = self.state.borrow();
        let total = state.hits + state.misses;
        LayoutStats {
            panels: state.registry.len(),
            hits: state.hits,
            misses: state.misses,
            hit_rate: if total > 0 {
                state.hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }

    /// Persistable snapshot of the current configuration.
    pub fn snapshot(&self) -> LayoutSnapshot {
        let state = self.state.borrow();
        let panels = state
            .registry
            .iter()
            .map(|(id, panel)| PanelRecord {
                id: id.clone(),
                edge: panel.edge,
                amount: panel.amount,
            })
            .collect();
        LayoutSnapshot::new(panels, state.order.clone(), state.overlaps.clone())
    }

    /// Restore a previously captured configuration, replacing all current
    /// state. Existing style views keep working when their panel survives
    /// the restore.
    pub fn restore(&self, snapshot: LayoutSnapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;
        let mut state = self.state.borrow_mut();
        state.registry = PanelRegistry::new();
        for record in snapshot.panels {
            state.registry.insert(record.id, record.edge, record.amount);
        }
        state.order = snapshot.order;
        state.overlaps = snapshot.overlaps;
        state.invalidate();
        Ok(())
    }
}

/// Live, always-current style view for one registered panel.
///
/// Obtained from [`DockLayout::register`]. Each [`style`](Self::style) call
/// resolves against the context's current state; nothing is pushed to the
/// view. Dropping the view does not unregister the panel; unregistration
/// is an explicit host action.
#[derive(Debug, Clone)]
pub struct StyleView {
    state: Weak<RefCell<LayoutState>>,
    id: PanelId,
}

impl StyleView {
    /// The panel this view is bound to.
    #[inline]
    pub fn id(&self) -> &PanelId {
        &self.id
    }

    fn upgrade(&self) -> Result<Rc<RefCell<LayoutState>>, LayoutError> {
        self.state.upgrade().ok_or(LayoutError::NoLayoutContext)
    }

    /// The panel's current positioning record.
    ///
    /// Fails with [`LayoutError::NoLayoutContext`] when the context has been
    /// dropped, or [`LayoutError::MissingLayoutEntry`] when the current
    /// order excludes this panel.
    pub fn style(&self) -> Result<PanelStyle, LayoutError> {
        let state = self.upgrade()?;
        let mut guard = state.borrow_mut();
        guard.refresh();
        let state = &*guard;
        style::project(
            self.id.as_str(),
            &state.registry,
            &state.derived.layers,
            state.derived.shifts.get(self.id.as_str()),
        )
    }

    /// Update the panel's thickness.
    ///
    /// A no-op when the panel is no longer registered; reads still surface
    /// the missing entry.
    pub fn set_amount(&self, amount: f64) -> Result<(), LayoutError> {
        let state = self.upgrade()?;
        let mut state = state.borrow_mut();
        let changed = match state.registry.get_mut(self.id.as_str()) {
            Some(panel) => {
                panel.amount = amount;
                true
            }
            None => false,
        };
        if changed {
            state.invalidate();
        }
        Ok(())
    }

    /// Move the panel to a different edge.
    ///
    /// A no-op when the panel is no longer registered.
    pub fn set_edge(&self, edge: Edge) -> Result<(), LayoutError> {
        let state = self.upgrade()?;
        let mut state = state.borrow_mut();
        let changed = match state.registry.get_mut(self.id.as_str()) {
            Some(panel) => {
                panel.edge = edge;
                true
            }
            None => false,
        };
        if changed {
            state.invalidate();
        }
        Ok(())
    }
}

/// Read-only padding handle for the content collaborator.
#[derive(Debug, Clone)]
pub struct ContentView {
    state: Weak<RefCell<LayoutState>>,
}

impl ContentView {
    /// The final layer's insets.
    pub fn padding(&self) -> Result<Insets, LayoutError> {
        let state = self.state.upgrade().ok_or(LayoutError::NoLayoutContext)?;
        let mut guard = state.borrow_mut();
        guard.refresh();
        Ok(guard
            .derived
            .layers
            .last()
            .map_or(Insets::ZERO, |layer| layer.insets))
    }

    /// Padding as the CSS 4-sided shorthand.
    pub fn padding_css(&self) -> Result<String, LayoutError> {
        Ok(self.padding()?.to_string())
    }
}
