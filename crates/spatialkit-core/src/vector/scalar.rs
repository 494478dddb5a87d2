//! Scalar strategies for vector components.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Zero value strategy for a scalar type.
///
/// Implement this for custom scalar types to use them in
/// [`Transformed`](super::Transformed) vectors.
pub trait Zero: Copy {
    const ZERO: Self;
}

macro_rules! zero_impl {
    ($zero:expr => $($ty:ty),+) => {
        $(impl Zero for $ty {
            const ZERO: Self = $zero;
        })+
    };
}

zero_impl!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
zero_impl!(0.0 => f32, f64);

/// Floating-point scalars, the only ones vector arithmetic is defined for.
pub trait FloatScalar:
    Zero
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn abs(self) -> Self;
}

impl FloatScalar for f32 {
    fn abs(self) -> Self {
        f32::abs(self)
    }
}

impl FloatScalar for f64 {
    fn abs(self) -> Self {
        f64::abs(self)
    }
}
