//! Point annotations.

use crate::vector::Point3D;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Semantic tag that changes how a mark is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkTag {
    /// Placed by a direct touch; drawn at finger size.
    Touch,
}

/// A single annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Mark {
    Point {
        position: Point3D,
        tag: Option<MarkTag>,
    },
}

impl Mark {
    /// Drawn diameter of an untagged point.
    pub const POINT_DIAMETER: f64 = 12.0;
    /// Drawn diameter of a touch point.
    pub const TOUCH_DIAMETER: f64 = 44.0;

    pub fn point(position: Point3D) -> Self {
        Mark::Point {
            position,
            tag: None,
        }
    }

    pub fn touch(position: Point3D) -> Self {
        Mark::Point {
            position,
            tag: Some(MarkTag::Touch),
        }
    }

    pub fn position(&self) -> Point3D {
        match self {
            Mark::Point { position, .. } => *position,
        }
    }

    pub fn tag(&self) -> Option<MarkTag> {
        match self {
            Mark::Point { tag, .. } => *tag,
        }
    }

    /// Largest z the mark occupies. Render order sorts on this.
    pub fn max_depth(&self) -> f64 {
        self.position().z
    }

    pub fn diameter(&self) -> f64 {
        match self.tag() {
            Some(MarkTag::Touch) => Self::TOUCH_DIAMETER,
            None => Self::POINT_DIAMETER,
        }
    }

    /// Back-to-front ordering.
    pub fn depth_order(&self, other: &Mark) -> Ordering {
        self.max_depth().total_cmp(&other.max_depth())
    }

    /// The same mark at a new position.
    pub fn moved_to(self, position: Point3D) -> Self {
        match self {
            Mark::Point { tag, .. } => Mark::Point { position, tag },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diameter_follows_tag() {
        let origin = Point3D::ZERO;
        assert_eq!(Mark::point(origin).diameter(), 12.0);
        assert_eq!(Mark::touch(origin).diameter(), 44.0);
    }

    #[test]
    fn test_moved_to_keeps_tag() {
        let mark = Mark::touch(Point3D::ZERO).moved_to(Point3D::new(1.0, 2.0, 3.0));
        assert_eq!(mark.tag(), Some(MarkTag::Touch));
        assert_eq!(mark.max_depth(), 3.0);
    }

    #[test]
    fn test_depth_order() {
        let near = Mark::point(Point3D::new(0.0, 0.0, 5.0));
        let far = Mark::point(Point3D::new(0.0, 0.0, -5.0));
        assert_eq!(far.depth_order(&near), Ordering::Less);
        assert_eq!(near.depth_order(&near), Ordering::Equal);
    }

    #[test]
    fn test_serialization() {
        let mark = Mark::touch(Point3D::new(1.0, 2.0, 0.0));
        let json = serde_json::to_string(&mark).unwrap();
        assert!(json.contains("\"kind\":\"point\""));
        assert!(json.contains("\"tag\":\"touch\""));
        let back: Mark = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mark);
    }
}
