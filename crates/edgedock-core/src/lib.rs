#![forbid(unsafe_code)]

//! Core: geometry and identity primitives for the EdgeDock layout engine.
//!
//! # Role in EdgeDock
//! `edgedock-core` holds the types shared between the solver and its
//! consumers: the dockable [`geometry::Edge`]s, the cumulative
//! [`geometry::Insets`] box, and the opaque [`id::PanelId`]. No layout
//! logic lives here.
//!
//! # How it fits in the system
//! The solver (`edgedock-layout`) folds panel thicknesses into `Insets`
//! layers and keys its registry by `PanelId`. Rendering collaborators only
//! ever see these primitives plus the solver's computed style records.

pub mod geometry;
pub mod id;
