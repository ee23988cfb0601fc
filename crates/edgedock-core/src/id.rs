//! Panel identity.

use std::borrow::Borrow;
use std::fmt;

/// Opaque identifier for a registered panel.
///
/// Ids arrive from the host as strings (both directly and embedded in order
/// tokens such as `"app-bar:append"`), so the newtype wraps a `String` and
/// implements [`Borrow<str>`] to keep map lookups allocation-free.
///
/// Uniqueness holds only among *currently registered* panels: re-registering
/// an id replaces its entry rather than duplicating it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PanelId(String);

impl PanelId {
    /// Create a panel id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for PanelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PanelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn str_lookup() {
        let mut map = HashMap::new();
        map.insert(PanelId::new("app-bar"), 64.0);
        assert_eq!(map.get("app-bar"), Some(&64.0));
        assert_eq!(map.get("nav"), None);
    }

    #[test]
    fn display_is_raw() {
        assert_eq!(PanelId::new("footer").to_string(), "footer");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_transparent() {
        let id = PanelId::new("nav");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"nav\"");
        let back: PanelId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
