#![forbid(unsafe_code)]

//! Declarative docking-layout solver for application chrome.
//!
//! # Role in EdgeDock
//! Panels (app bars, navigation drawers, footers) pin to one of four window
//! edges with a pixel thickness. The solver computes, for every panel, the
//! inset box it must occupy so panels stack without overlapping, plus the
//! padding left for page content.
//!
//! # Primary responsibilities
//! - **[`registry`]**: the active panel set and registration order.
//! - **[`layers`]**: order-sensitive accumulation of cumulative inset boxes.
//! - **[`overlap`]**: pairwise cancellation of inset contributions.
//! - **[`style`]**: projection of a panel's final positioning record.
//! - **[`context`]**: the per-tree API panels and content talk to, with
//!   generation-tracked lazy recomputation.
//! - **[`snapshot`]**: versioned persistence of the configuration.
//!
//! # How it fits in the system
//! Rendering collaborators are consumers only: a panel wrapper reads its
//! [`StyleView`], the content wrapper reads the aggregate padding. Neither
//! feeds anything back into the solver beyond registration and its own
//! edge/amount updates.
//!
//! # Example
//! ```
//! use edgedock_layout::{DockLayout, Edge};
//!
//! let layout = DockLayout::new();
//! let header = layout.register("header", Edge::Top, 64.0);
//! layout.register("footer", Edge::Bottom, 48.0);
//!
//! assert_eq!(layout.padding_css(), "64px 0px 48px 0px");
//! assert_eq!(header.style()?.z_index, 2);
//! # Ok::<(), edgedock_layout::LayoutError>(())
//! ```

pub mod context;
pub mod error;
pub mod layers;
pub mod overlap;
pub mod registry;
pub mod snapshot;
pub mod style;

pub use context::{ContentView, DockLayout, LayoutStats, StyleView};
pub use edgedock_core::geometry::{Edge, Insets};
pub use edgedock_core::id::PanelId;
pub use error::LayoutError;
pub use layers::Layer;
pub use overlap::OverlapShift;
pub use registry::{Panel, PanelRegistry};
pub use snapshot::{LAYOUT_SCHEMA_VERSION, LayoutSnapshot, PanelRecord, SnapshotError};
pub use style::{Dimension, PanelStyle};
