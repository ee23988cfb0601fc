//! Style projection: the positioning record for one panel.

use std::fmt;

use edgedock_core::geometry::Edge;
use edgedock_core::id::PanelId;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::layers::Layer;
use crate::overlap::OverlapShift;
use crate::registry::PanelRegistry;

/// One sizing dimension of a projected panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// A fixed pixel size: the panel's own thickness.
    Px(f64),
    /// Full extent minus the accumulated insets at both ends of the axis.
    Stretch { start: f64, end: f64 },
}

impl fmt::Display for Dimension {
    /// Renders `"<n>px"` or `"calc(100% - <start>px - <end>px)"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(value) => write!(f, "{value}px"),
            Dimension::Stretch { start, end } => {
                write!(f, "calc(100% - {start}px - {end}px)")
            }
        }
    }
}

/// Computed positioning record for one docked panel.
///
/// A pure function of the current registry, order, and overlap state. The
/// panel's own edge is pinned at offset zero along its axis; the margin for
/// the axis end it does not occupy is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelStyle {
    /// The edge this panel is pinned to (offset 0 along its axis).
    pub edge: Edge,
    /// Thickness for horizontal panels, stretched otherwise.
    pub width: Dimension,
    /// Thickness for vertical panels, stretched otherwise.
    pub height: Dimension,
    pub margin_top: Option<f64>,
    pub margin_right: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub margin_left: Option<f64>,
    /// Stacking order: panels folded in earlier sit above later ones, and
    /// everything sits above content.
    pub z_index: i32,
}

/// Project the style record for `id` from the current layer sequence.
///
/// The outer boundary is the predecessor layer's insets (the state
/// immediately before this panel folds in), optionally corrected by an
/// overlap shift. Fails with [`LayoutError::MissingLayoutEntry`] when `id`
/// has no layer: the externally supplied order omitted a registered panel,
/// which is a configuration error the caller must surface.
pub fn project(
    id: &str,
    registry: &PanelRegistry,
    layers: &[Layer],
    shift: Option<&OverlapShift>,
) -> Result<PanelStyle, LayoutError> {
    let index = layers
        .iter()
        .position(|layer| layer.id.as_ref().is_some_and(|layer_id| layer_id.as_str() == id))
        .ok_or_else(|| LayoutError::MissingLayoutEntry {
            id: PanelId::from(id),
        })?;
    let panel = registry
        .get(id)
        .ok_or_else(|| LayoutError::MissingLayoutEntry {
            id: PanelId::from(id),
        })?;

    // State immediately before this panel folds in. The base layer is always
    // first, so index >= 1 here.
    let mut outer = layers[index - 1].insets;
    if let Some(shift) = shift {
        // Signed; negative results are deliberately not clamped.
        outer.set(shift.edge, outer.get(shift.edge) + shift.amount);
    }

    let horizontal = panel.edge.is_horizontal();
    let opposite = panel.edge == Edge::Right;

    Ok(PanelStyle {
        edge: panel.edge,
        width: if horizontal {
            Dimension::Px(panel.amount)
        } else {
            Dimension::Stretch {
                start: outer.left,
                end: outer.right,
            }
        },
        height: if horizontal {
            Dimension::Stretch {
                start: outer.top,
                end: outer.bottom,
            }
        } else {
            Dimension::Px(panel.amount)
        },
        margin_top: (panel.edge != Edge::Bottom).then_some(outer.top),
        margin_right: opposite.then_some(outer.right),
        margin_bottom: (panel.edge != Edge::Top).then_some(outer.bottom),
        margin_left: (!opposite).then_some(outer.left),
        z_index: (layers.len() - index) as i32,
    })
}
