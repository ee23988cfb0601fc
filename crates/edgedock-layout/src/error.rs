//! Error conditions surfaced to callers.

use std::fmt;

use edgedock_core::id::PanelId;

/// Caller-fatal layout failures.
///
/// These are the only two conditions the engine refuses to absorb. Everything
/// else (unregistering an unknown id, unknown ids in order or overlap tokens,
/// overlap pairs with an inactive partner) degrades as a no-op, because
/// external configuration may transiently disagree with the live
/// registration set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A panel or content reader was used after its layout context was
    /// dropped.
    NoLayoutContext,
    /// A panel's id has no entry in the current layer sequence, typically
    /// because the externally supplied order omitted it.
    MissingLayoutEntry { id: PanelId },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLayoutContext => write!(f, "no layout context is active"),
            Self::MissingLayoutEntry { id } => {
                write!(f, "panel {id} is missing from the layout order")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
