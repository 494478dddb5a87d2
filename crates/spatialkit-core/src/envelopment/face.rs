//! Per-face geometry of an envelopment volume.
//!
//! Volume coordinates put the origin at the center of the volume, with x to
//! the right, y down and z toward the viewer. Every face's content frame has
//! its origin at the frame center and starts out facing +z.

use super::{Adaptation, Placement};
use crate::vector::{Axis3, Size3D, Vector3D};
use glam::{DMat4, DVec3};
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// A rotation about one of the volume axes (right-handed, in degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub angle_degrees: f64,
    pub axis: Axis3,
}

impl Rotation {
    pub fn new(angle_degrees: f64, axis: Axis3) -> Self {
        Self { angle_degrees, axis }
    }

    pub fn matrix(&self) -> DMat4 {
        let radians = self.angle_degrees.to_radians();
        match self.axis {
            Axis3::X => DMat4::from_rotation_x(radians),
            Axis3::Y => DMat4::from_rotation_y(radians),
            Axis3::Z => DMat4::from_rotation_z(radians),
        }
    }
}

/// Where and how one placement's content is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceGeometry {
    pub placement: Placement,
    /// Size of the content frame, in the face's own plane.
    pub frame: Size,
    /// Rotation applied to the content frame, if any.
    pub rotation: Option<Rotation>,
    /// Center of the face relative to the center of the volume.
    pub center: Vector3D,
    /// Whether the content is flipped horizontally.
    pub mirrored: bool,
}

impl FaceGeometry {
    /// Geometry of `placement` on a volume with depth.
    ///
    /// Every face except `FrontOutward` faces into the volume.
    pub fn volumetric(placement: Placement, size: Size3D) -> Self {
        let Size3D { width, height, depth } = size;
        let (frame, rotation, center) = match placement {
            Placement::Back => (
                Size::new(width, height),
                None,
                Vector3D::new(0.0, 0.0, -depth / 2.0),
            ),
            Placement::Front => (
                Size::new(width, height),
                Some(Rotation::new(180.0, Axis3::Y)),
                Vector3D::new(0.0, 0.0, depth / 2.0),
            ),
            Placement::FrontOutward => (
                Size::new(width, height),
                None,
                Vector3D::new(0.0, 0.0, depth / 2.0),
            ),
            Placement::Leading => (
                Size::new(depth, height),
                Some(Rotation::new(90.0, Axis3::Y)),
                Vector3D::new(-width / 2.0, 0.0, 0.0),
            ),
            Placement::Trailing => (
                Size::new(depth, height),
                Some(Rotation::new(-90.0, Axis3::Y)),
                Vector3D::new(width / 2.0, 0.0, 0.0),
            ),
            Placement::Top => (
                Size::new(width, depth),
                Some(Rotation::new(-90.0, Axis3::X)),
                Vector3D::new(0.0, -height / 2.0, 0.0),
            ),
            Placement::Bottom => (
                Size::new(width, depth),
                Some(Rotation::new(90.0, Axis3::X)),
                Vector3D::new(0.0, height / 2.0, 0.0),
            ),
        };
        Self {
            placement,
            frame,
            rotation,
            center,
            mirrored: false,
        }
    }

    /// Geometry of `placement` on a flat volume: unrotated, filling the
    /// whole width and height.
    pub fn flat(placement: Placement, size: Size3D) -> Self {
        Self {
            placement,
            frame: Size::new(size.width, size.height),
            rotation: None,
            center: Vector3D::ZERO,
            mirrored: placement.mirrored_when_flat(),
        }
    }

    /// Offset of the face center from the composite origin, which sits at
    /// the center of the back plane.
    pub fn origin_offset(&self, size: Size3D) -> Vector3D {
        self.center + Vector3D::new(0.0, 0.0, size.depth / 2.0)
    }

    /// Maps points in the content frame into volume coordinates.
    pub fn transform(&self) -> DMat4 {
        let mut transform = DMat4::from_translation(self.center.into());
        if let Some(rotation) = self.rotation {
            transform = transform * rotation.matrix();
        }
        if self.mirrored {
            transform = transform * DMat4::from_scale(DVec3::new(-1.0, 1.0, 1.0));
        }
        transform
    }

    /// Direction the content faces, in volume coordinates.
    pub fn normal(&self) -> DVec3 {
        self.transform().transform_vector3(DVec3::Z)
    }
}

/// Faces to draw for a volume of `size`, given which placements have
/// content.
///
/// With depth, every supplied placement gets its volumetric face, in
/// [`Placement::ALL`] order. Without depth, `adaptation` decides which of
/// them are drawn flat; side, top and bottom faces are dropped unless the
/// policy names one of them explicitly.
pub fn plan_faces(
    size: Size3D,
    adaptation: Adaptation,
    supplied: &[Placement],
) -> Vec<FaceGeometry> {
    let is_supplied = |placement: &Placement| supplied.contains(placement);
    let faces: Vec<FaceGeometry> = if size.has_depth() {
        Placement::ALL
            .into_iter()
            .filter(is_supplied)
            .map(|placement| FaceGeometry::volumetric(placement, size))
            .collect()
    } else {
        adaptation
            .visible_placements()
            .into_iter()
            .filter(is_supplied)
            .map(|placement| FaceGeometry::flat(placement, size))
            .collect()
    };
    for face in &faces {
        log::trace!(
            "{} face: frame {}x{}, center ({}, {}, {}), mirrored {}",
            face.placement,
            face.frame.width,
            face.frame.height,
            face.center.x,
            face.center.y,
            face.center.z,
            face.mirrored
        );
    }
    faces
}
