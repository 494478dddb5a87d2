//! Identity keys for marks produced by gestures and callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Key for a mark in a [`Marks`](super::Marks) collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", content = "id", rename_all = "camelCase")]
pub enum MarkKey {
    /// Placed directly by the caller.
    Static(Uuid),
    /// Placed directly by the caller under a readable name.
    Named(String),
    /// Follows one hover session.
    Hover(Uuid),
    /// Follows one drag session.
    Drag(Uuid),
    /// Follows one spatial event by its id.
    Spatial(u64),
}

impl MarkKey {
    /// Fresh static key.
    pub fn new_static() -> Self {
        MarkKey::Static(Uuid::new_v4())
    }

    pub fn named(name: impl Into<String>) -> Self {
        MarkKey::Named(name.into())
    }

    pub fn source(&self) -> MarkSource {
        match self {
            MarkKey::Static(_) => MarkSource::Static,
            MarkKey::Named(_) => MarkSource::Named,
            MarkKey::Hover(_) => MarkSource::Hover,
            MarkKey::Drag(_) => MarkSource::Drag,
            MarkKey::Spatial(_) => MarkSource::Spatial,
        }
    }
}

impl fmt::Display for MarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkKey::Static(id) => write!(f, "static:{}", id),
            MarkKey::Named(name) => write!(f, "named:{}", name),
            MarkKey::Hover(id) => write!(f, "hover:{}", id),
            MarkKey::Drag(id) => write!(f, "drag:{}", id),
            MarkKey::Spatial(id) => write!(f, "spatial:{}", id),
        }
    }
}

/// Kind of key, for bulk removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkSource {
    Static,
    Named,
    Hover,
    Drag,
    Spatial,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source() {
        assert_eq!(MarkKey::new_static().source(), MarkSource::Static);
        assert_eq!(MarkKey::named("pin").source(), MarkSource::Named);
        assert_eq!(MarkKey::Spatial(7).source(), MarkSource::Spatial);
    }

    #[test]
    fn test_static_keys_are_unique() {
        assert_ne!(MarkKey::new_static(), MarkKey::new_static());
    }

    #[test]
    fn test_display() {
        assert_eq!(MarkKey::Spatial(3).to_string(), "spatial:3");
        assert_eq!(MarkKey::named("a").to_string(), "named:a");
    }
}
