//! Persisted layout configuration with versioning.
//!
//! A [`LayoutSnapshot`] captures everything needed to reconstruct a
//! [`DockLayout`](crate::context::DockLayout): the registered panels in
//! registration order plus the external order and overlap token lists.
//!
//! # Schema Versioning Policy
//!
//! - **Additive fields** ride in the `extensions` map without a version bump.
//! - **Breaking changes** (field removal, semantic changes) increment
//!   [`LAYOUT_SCHEMA_VERSION`] and require a migration path. Loaders reject
//!   unknown versions with a typed error rather than guessing.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use edgedock_core::geometry::Edge;
use edgedock_core::id::PanelId;
use serde::{Deserialize, Serialize};

/// Current snapshot schema version.
pub const LAYOUT_SCHEMA_VERSION: u16 = 1;

/// One registered panel, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRecord {
    pub id: PanelId,
    pub edge: Edge,
    pub amount: f64,
}

/// Persisted layout configuration.
///
/// Forward-compatible: unknown data lands in `extensions` for
/// round-tripping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Schema version for migration detection.
    #[serde(default = "default_schema_version")]
    pub schema_version: u16,
    /// Registered panels, in registration order.
    pub panels: Vec<PanelRecord>,
    /// External order tokens (`"id"` or `"id:extra"`).
    #[serde(default)]
    pub order: Vec<String>,
    /// External overlap tokens (`"idA:idB"`).
    #[serde(default)]
    pub overlaps: Vec<String>,
    /// Forward-compatible extension bag.
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
}

fn default_schema_version() -> u16 {
    LAYOUT_SCHEMA_VERSION
}

impl LayoutSnapshot {
    /// Create a v1 snapshot.
    #[must_use]
    pub fn new(panels: Vec<PanelRecord>, order: Vec<String>, overlaps: Vec<String>) -> Self {
        Self {
            schema_version: LAYOUT_SCHEMA_VERSION,
            panels,
            order,
            overlaps,
            extensions: BTreeMap::new(),
        }
    }

    /// Validate the schema version and structural invariants.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.schema_version != LAYOUT_SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.schema_version,
                expected: LAYOUT_SCHEMA_VERSION,
            });
        }

        let mut seen = BTreeSet::new();
        for record in &self.panels {
            if !seen.insert(record.id.as_str()) {
                return Err(SnapshotError::DuplicatePanel {
                    id: record.id.clone(),
                });
            }
            if !record.amount.is_finite() || record.amount < 0.0 {
                return Err(SnapshotError::InvalidAmount {
                    id: record.id.clone(),
                    amount: record.amount,
                });
            }
        }

        Ok(())
    }
}

/// Validation failures when restoring a persisted snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotError {
    UnsupportedVersion { found: u16, expected: u16 },
    DuplicatePanel { id: PanelId },
    InvalidAmount { id: PanelId, amount: f64 },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, expected } => {
                write!(f, "unsupported snapshot version {found}, expected {expected}")
            }
            Self::DuplicatePanel { id } => {
                write!(f, "panel {id} appears more than once in snapshot")
            }
            Self::InvalidAmount { id, amount } => {
                write!(f, "panel {id} has invalid amount {amount}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, edge: Edge, amount: f64) -> PanelRecord {
        PanelRecord {
            id: PanelId::new(id),
            edge,
            amount,
        }
    }

    #[test]
    fn valid_snapshot_passes() {
        let snapshot = LayoutSnapshot::new(
            vec![
                record("header", Edge::Top, 64.0),
                record("footer", Edge::Bottom, 48.0),
            ],
            vec!["footer".to_owned(), "header".to_owned()],
            vec!["header:footer".to_owned()],
        );
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut snapshot = LayoutSnapshot::new(Vec::new(), Vec::new(), Vec::new());
        snapshot.schema_version = 2;
        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::UnsupportedVersion {
                found: 2,
                expected: 1
            })
        );
    }

    #[test]
    fn duplicate_panel_is_rejected() {
        let snapshot = LayoutSnapshot::new(
            vec![record("a", Edge::Top, 1.0), record("a", Edge::Left, 2.0)],
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::DuplicatePanel {
                id: PanelId::new("a")
            })
        );
    }

    #[test]
    fn negative_amount_is_rejected() {
        let snapshot =
            LayoutSnapshot::new(vec![record("a", Edge::Top, -1.0)], Vec::new(), Vec::new());
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn serde_round_trip() {
        let snapshot = LayoutSnapshot::new(
            vec![record("header", Edge::Top, 64.0)],
            vec!["header".to_owned()],
            Vec::new(),
        );
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: LayoutSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let json = r#"{"panels":[{"id":"a","edge":"top","amount":10.0}]}"#;
        let snapshot: LayoutSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.schema_version, LAYOUT_SCHEMA_VERSION);
        assert!(snapshot.order.is_empty());
        assert!(snapshot.overlaps.is_empty());
        assert!(snapshot.extensions.is_empty());
    }
}
