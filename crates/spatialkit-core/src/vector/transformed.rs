//! Vectors produced by changing the scalar type of another vector.

use super::{Component, FloatScalar, FloatVector, Vector, Zero};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A vector over key set `C` holding scalars of type `T`.
///
/// Returned by [`Vector::transform`] when an elementwise map changes the
/// scalar type, so the result cannot be the source type any more.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed<C, T> {
    values: Vec<T>,
    components: PhantomData<C>,
}

impl<C: Component, T: Zero> Transformed<C, T> {
    /// Consume the vector, yielding its values in declared key order.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<C: Component, T: Zero> Vector for Transformed<C, T> {
    type Scalar = T;
    type Component = C;

    fn zero() -> Self {
        Self {
            values: vec![T::ZERO; C::ALL.len()],
            components: PhantomData,
        }
    }

    fn get(&self, component: C) -> T {
        self.values[component.index()]
    }

    fn set(&mut self, component: C, value: T) {
        self.values[component.index()] = value;
    }
}

impl<C: Component, T: FloatScalar> Add for Transformed<C, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.added(&rhs)
    }
}

impl<C: Component, T: FloatScalar> Sub for Transformed<C, T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtracted(&rhs)
    }
}

impl<C: Component, T: FloatScalar> Mul<T> for Transformed<C, T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scaled(rhs)
    }
}

impl<C: Component, T: FloatScalar> Div<T> for Transformed<C, T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.divided_by(rhs)
    }
}

impl<C: Component, T: FloatScalar> AddAssign for Transformed<C, T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.added(&rhs);
    }
}

impl<C: Component, T: FloatScalar> SubAssign for Transformed<C, T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtracted(&rhs);
    }
}

impl<C: Component, T: FloatScalar> MulAssign<T> for Transformed<C, T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scaled(rhs);
    }
}

impl<C: Component, T: FloatScalar> DivAssign<T> for Transformed<C, T> {
    fn div_assign(&mut self, rhs: T) {
        *self = self.divided_by(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Axis2, Point3D};

    #[test]
    fn test_transform_to_f32_and_back() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        let narrow = p.transform(|v| v as f32);
        assert_eq!(narrow.values(), vec![1.0_f32, 2.0, 3.0]);

        let wide = narrow.transform(f64::from);
        assert_eq!(Point3D::truncating(&wide), p);
    }

    #[test]
    fn test_operators() {
        let a = Transformed::<Axis2, f32>::from_fn(|c| if c == Axis2::X { 1.0 } else { 2.0 });
        let b = Transformed::<Axis2, f32>::from_fn(|_| 0.5);
        let mut sum = a.clone() + b.clone();
        assert_eq!(sum.values(), vec![1.5, 2.5]);
        sum -= b;
        assert_eq!(sum, a);
        sum *= 4.0;
        assert_eq!((sum / 2.0).into_values(), vec![2.0, 4.0]);
    }
}
