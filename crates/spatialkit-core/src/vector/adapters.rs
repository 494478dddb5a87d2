//! [`Vector`] implementations for kurbo and glam types.

use super::{Axis2, Axis3, Extent2, Vector, Vector2, Vector3};

macro_rules! foreign_vector {
    ($ty:ty, $scalar:ty, $component:ident { $($variant:ident => $field:ident),+ }) => {
        impl Vector for $ty {
            type Scalar = $scalar;
            type Component = $component;

            fn zero() -> Self {
                <$ty>::ZERO
            }

            fn get(&self, component: $component) -> $scalar {
                match component {
                    $($component::$variant => self.$field),+
                }
            }

            fn set(&mut self, component: $component, value: $scalar) {
                match component {
                    $($component::$variant => self.$field = value),+
                }
            }
        }
    };
}

foreign_vector!(kurbo::Point, f64, Axis2 { X => x, Y => y });
foreign_vector!(kurbo::Vec2, f64, Axis2 { X => x, Y => y });
foreign_vector!(kurbo::Size, f64, Extent2 { Width => width, Height => height });
foreign_vector!(glam::Vec2, f32, Axis2 { X => x, Y => y });
foreign_vector!(glam::Vec3, f32, Axis3 { X => x, Y => y, Z => z });
foreign_vector!(glam::DVec2, f64, Axis2 { X => x, Y => y });
foreign_vector!(glam::DVec3, f64, Axis3 { X => x, Y => y, Z => z });

impl Vector2 for kurbo::Point {}
impl Vector2 for kurbo::Vec2 {}
impl Vector2 for kurbo::Size {}
impl Vector2 for glam::Vec2 {}
impl Vector2 for glam::DVec2 {}
impl Vector3 for glam::Vec3 {}
impl Vector3 for glam::DVec3 {}
