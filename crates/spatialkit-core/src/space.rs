//! Coordinate spaces for correlating gesture locations with an overlay.

use crate::error::{SpatialError, SpatialResult};
use crate::vector::Point3D;
use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Identifies the coordinate frame a location is expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoordinateSpace {
    /// The frame of the view the gesture is attached to.
    #[default]
    Local,
    /// The host's root frame.
    Global,
    /// A frame the host registered under a name.
    Named(String),
}

impl CoordinateSpace {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// Placement of an overlay's local frame inside the global frame.
///
/// Works like a 2D camera: `offset` is where the local origin lands in
/// global coordinates and `zoom` is the local-to-global scale. Zoom is always
/// finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpaceTransformParts")]
pub struct SpaceTransform {
    offset: Vec2,
    zoom: f64,
}

#[derive(Deserialize)]
struct SpaceTransformParts {
    offset: Vec2,
    zoom: f64,
}

impl TryFrom<SpaceTransformParts> for SpaceTransform {
    type Error = SpatialError;

    fn try_from(parts: SpaceTransformParts) -> SpatialResult<Self> {
        Self::new(parts.offset, parts.zoom)
    }
}

impl Default for SpaceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl SpaceTransform {
    pub const IDENTITY: SpaceTransform = SpaceTransform {
        offset: Vec2::ZERO,
        zoom: 1.0,
    };

    pub fn new(offset: Vec2, zoom: f64) -> SpatialResult<Self> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(SpatialError::InvalidZoom(zoom));
        }
        Ok(Self { offset, zoom })
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Local-to-global transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Global-to-local transform.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    pub fn to_local(&self, global: Point) -> Point {
        self.inverse_transform() * global
    }

    pub fn to_global(&self, local: Point) -> Point {
        self.transform() * local
    }
}

/// The coordinate frame an overlay renders into.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayFrame {
    /// Name under which the host registered the overlay's frame.
    pub space: CoordinateSpace,
    /// Where that frame sits in global coordinates.
    pub transform: SpaceTransform,
}

impl OverlayFrame {
    pub fn new(space: CoordinateSpace) -> Self {
        Self {
            space,
            transform: SpaceTransform::IDENTITY,
        }
    }

    pub fn with_transform(mut self, transform: SpaceTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Express a planar location given in `space` in overlay coordinates.
    ///
    /// Locations in the overlay's own space or the gesture's local space pass
    /// through, global ones are mapped through the inverse transform, and any
    /// other named space cannot be correlated.
    pub fn resolve(&self, location: Point, space: &CoordinateSpace) -> Option<Point> {
        if *space == self.space || *space == CoordinateSpace::Local {
            return Some(location);
        }
        match space {
            CoordinateSpace::Global => Some(self.transform.to_local(location)),
            _ => None,
        }
    }

    /// Spatial variant of [`resolve`](Self::resolve); depth scales with zoom.
    pub fn resolve_3d(&self, location: Point3D, space: &CoordinateSpace) -> Option<Point3D> {
        let planar = self.resolve(Point::new(location.x, location.y), space)?;
        let z = if *space == CoordinateSpace::Global && *space != self.space {
            location.z / self.transform.zoom()
        } else {
            location.z
        };
        Some(Point3D::new(planar.x, planar.y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_round_trip() {
        let transform = SpaceTransform::default();
        let p = Point::new(100.0, 200.0);
        assert_eq!(transform.to_local(p), p);
        assert_eq!(transform.to_global(p), p);
    }

    #[test]
    fn test_to_local_with_offset_and_zoom() {
        let transform = SpaceTransform::new(Vec2::new(50.0, 100.0), 2.0).unwrap();
        let local = transform.to_local(Point::new(150.0, 300.0));
        assert!((local.x - 50.0).abs() < f64::EPSILON);
        assert!((local.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let transform = SpaceTransform::new(Vec2::new(30.0, -20.0), 1.5).unwrap();
        let original = Point::new(123.0, 456.0);
        let back = transform.to_global(transform.to_local(original));
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_resolve_by_space() {
        let frame = OverlayFrame::new(CoordinateSpace::named("marks"))
            .with_transform(SpaceTransform::new(Vec2::new(10.0, 10.0), 1.0).unwrap());
        let p = Point::new(20.0, 30.0);

        assert_eq!(frame.resolve(p, &CoordinateSpace::named("marks")), Some(p));
        assert_eq!(frame.resolve(p, &CoordinateSpace::Local), Some(p));
        assert_eq!(frame.resolve(p, &CoordinateSpace::Global), Some(Point::new(10.0, 20.0)));
        assert_eq!(frame.resolve(p, &CoordinateSpace::named("sidebar")), None);
    }

    #[test]
    fn test_resolve_3d_scales_depth() {
        let frame = OverlayFrame::new(CoordinateSpace::named("marks"))
            .with_transform(SpaceTransform::new(Vec2::ZERO, 2.0).unwrap());
        let resolved = frame
            .resolve_3d(Point3D::new(4.0, 8.0, 12.0), &CoordinateSpace::Global)
            .unwrap();
        assert_eq!(resolved, Point3D::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_rejects_degenerate_zoom() {
        for zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SpaceTransform::new(Vec2::ZERO, zoom),
                Err(SpatialError::InvalidZoom(_))
            ));
        }
        assert!(serde_json::from_str::<SpaceTransform>(
            r#"{"offset":{"x":0.0,"y":0.0},"zoom":0.0}"#
        )
        .is_err());

        let transform = SpaceTransform::new(Vec2::new(5.0, 5.0), 0.5).unwrap();
        let json = serde_json::to_string(&transform).unwrap();
        assert_eq!(serde_json::from_str::<SpaceTransform>(&json).unwrap(), transform);
    }
}
