//! Layer accumulation: ordered cumulative inset boxes.
//!
//! Each docked panel is folded into a running [`Insets`] value on its own
//! edge, producing one [`Layer`] per panel after the initial zero layer. The
//! insets *before* a panel folds in are the outer boundary it is placed
//! against; the insets *after* become the boundary for the next panel, so
//! every panel is strictly contained by the union of all panels stacked
//! before it.

use edgedock_core::geometry::Insets;
use edgedock_core::id::PanelId;
use serde::{Deserialize, Serialize};

use crate::registry::PanelRegistry;

/// Cumulative insets recorded after folding in one panel.
///
/// `id` is `None` for the initial zero layer, which is always first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// The panel folded in by this layer, `None` for the base layer.
    pub id: Option<PanelId>,
    /// Cumulative insets including this layer's panel.
    pub insets: Insets,
}

impl Layer {
    fn base() -> Self {
        Self {
            id: None,
            insets: Insets::ZERO,
        }
    }

    /// Whether this is the initial zero layer.
    #[inline]
    pub fn is_base(&self) -> bool {
        self.id.is_none()
    }
}

/// Extract the id prefix of an order token (`"id"` or `"id:extra"`).
fn token_id(token: &str) -> &str {
    match token.split_once(':') {
        Some((id, _)) => id,
        None => token,
    }
}

/// Fold the effective panel sequence into cumulative inset layers.
///
/// When `order` is non-empty it supplies the sequence: each token's id prefix
/// is kept if (and only if) that id is currently registered. Otherwise the
/// registration order is used verbatim. Ids without a registry entry are
/// skipped. The result always starts with the zero layer, so its length is
/// `1 + |folded ids|`.
pub fn accumulate(order: &[String], registry: &PanelRegistry) -> Vec<Layer> {
    let mut layers = Vec::with_capacity(registry.len() + 1);
    layers.push(Layer::base());
    let mut previous = Insets::ZERO;

    let mut fold = |id: &str| {
        let Some(panel) = registry.get(id) else {
            return;
        };
        let next = previous.added(panel.edge, panel.amount);
        layers.push(Layer {
            id: Some(PanelId::from(id)),
            insets: next,
        });
        previous = next;
    };

    if order.is_empty() {
        for id in registry.registration_order() {
            fold(id.as_str());
        }
    } else {
        for token in order {
            fold(token_id(token));
        }
    }

    layers
}
