//! Spatial value types that kurbo does not provide.

use super::{Axis3, Component, Extent3, FloatVector, Vector, Vector3};
use crate::error::{SpatialError, SpatialResult};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A point in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A displacement in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// The extent of a rectangular volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size3D {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Point3D {
    pub const ZERO: Point3D = Point3D::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Vector3D {
    pub const ZERO: Vector3D = Vector3D::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Size3D {
    pub const ZERO: Size3D = Size3D::new(0.0, 0.0, 0.0);

    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self { width, height, depth }
    }

    /// Create a size, rejecting negative or non-finite extents.
    pub fn try_new(width: f64, height: f64, depth: f64) -> SpatialResult<Self> {
        let size = Self::new(width, height, depth);
        for &extent in Self::components() {
            let value = size.get(extent);
            if !value.is_finite() || value < 0.0 {
                return Err(SpatialError::InvalidSize(format!(
                    "{} must be a finite, non-negative number (got {})",
                    extent.name(),
                    value
                )));
            }
        }
        Ok(size)
    }

    /// A planar size with zero depth.
    pub const fn flat(width: f64, height: f64) -> Self {
        Self::new(width, height, 0.0)
    }

    /// Whether the volume has any depth.
    pub fn has_depth(&self) -> bool {
        self.depth > 0.0
    }
}

macro_rules! own_vector {
    ($ty:ident, $component:ident { $($variant:ident => $field:ident),+ }) => {
        impl Vector for $ty {
            type Scalar = f64;
            type Component = $component;

            fn zero() -> Self {
                Self::ZERO
            }

            fn get(&self, component: $component) -> f64 {
                match component {
                    $($component::$variant => self.$field),+
                }
            }

            fn set(&mut self, component: $component, value: f64) {
                match component {
                    $($component::$variant => self.$field = value),+
                }
            }
        }

        impl Vector3 for $ty {}

        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self.added(&rhs)
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                self.subtracted(&rhs)
            }
        }

        impl Mul for $ty {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                self.multiplied(&rhs)
            }
        }

        impl Div for $ty {
            type Output = Self;

            fn div(self, rhs: Self) -> Self {
                self.divided(&rhs)
            }
        }

        impl Mul<f64> for $ty {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                self.scaled(rhs)
            }
        }

        impl Div<f64> for $ty {
            type Output = Self;

            fn div(self, rhs: f64) -> Self {
                self.divided_by(rhs)
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                *self = self.added(&rhs);
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.subtracted(&rhs);
            }
        }

        impl MulAssign for $ty {
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.multiplied(&rhs);
            }
        }

        impl DivAssign for $ty {
            fn div_assign(&mut self, rhs: Self) {
                *self = self.divided(&rhs);
            }
        }

        impl MulAssign<f64> for $ty {
            fn mul_assign(&mut self, rhs: f64) {
                *self = self.scaled(rhs);
            }
        }

        impl DivAssign<f64> for $ty {
            fn div_assign(&mut self, rhs: f64) {
                *self = self.divided_by(rhs);
            }
        }

        impl From<DVec3> for $ty {
            fn from(v: DVec3) -> Self {
                Self::components_of(&v, 0.0)
            }
        }

        impl From<$ty> for DVec3 {
            fn from(v: $ty) -> Self {
                DVec3::components_of(&v, 0.0)
            }
        }
    };
}

own_vector!(Point3D, Axis3 { X => x, Y => y, Z => z });
own_vector!(Vector3D, Axis3 { X => x, Y => y, Z => z });
own_vector!(Size3D, Extent3 { Width => width, Height => height, Depth => depth });
