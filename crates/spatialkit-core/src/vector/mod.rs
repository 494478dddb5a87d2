//! Generic component-keyed vectors.
//!
//! A [`Vector`] is a fixed-arity tuple of same-typed scalars addressed by a
//! closed [`Component`] key set. The trait gives every implementor the same
//! construction, mapping, editing and conversion operations, whether the type
//! is one of ours ([`Point3D`], [`Size3D`], [`Vector3D`]) or an existing
//! kurbo/glam type.
//!
//! Conversions between vectors of different shapes go by position: the
//! first declared key of one maps to the first declared key of the other.

mod adapters;
mod component;
mod scalar;
mod transformed;
mod types;

pub use component::{Axis2, Axis3, Component, Extent2, Extent3};
pub use scalar::{FloatScalar, Zero};
pub use transformed::Transformed;
pub use types::{Point3D, Size3D, Vector3D};

/// Component-keyed access to a fixed-arity vector.
pub trait Vector: Sized + Clone {
    /// Scalar stored in every component.
    type Scalar: Copy;
    /// The key set addressing the components.
    type Component: Component;

    /// The vector with every component zero.
    fn zero() -> Self;

    /// Read one component.
    fn get(&self, component: Self::Component) -> Self::Scalar;

    /// Write one component.
    fn set(&mut self, component: Self::Component, value: Self::Scalar);

    /// Component keys in declared order.
    fn components() -> &'static [Self::Component] {
        <Self::Component as Component>::ALL
    }

    /// Number of components.
    fn count() -> usize {
        Self::components().len()
    }

    /// Build a vector by calling `f` once per key, in declared order.
    ///
    /// Stops at the first error and returns it.
    fn try_from_fn<E, F>(mut f: F) -> Result<Self, E>
    where
        F: FnMut(Self::Component) -> Result<Self::Scalar, E>,
    {
        let mut vector = Self::zero();
        for &component in Self::components() {
            vector.set(component, f(component)?);
        }
        Ok(vector)
    }

    /// Build a vector by calling `f` once per key, in declared order.
    fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Self::Component) -> Self::Scalar,
    {
        let mut vector = Self::zero();
        for &component in Self::components() {
            vector.set(component, f(component));
        }
        vector
    }

    /// Component values in declared order.
    fn values(&self) -> Vec<Self::Scalar> {
        Self::components().iter().map(|&c| self.get(c)).collect()
    }

    /// Elementwise transform into a new vector of the same type.
    fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Self::Scalar) -> Self::Scalar,
    {
        Self::from_fn(|c| f(self.get(c)))
    }

    /// Elementwise transform that also sees the component key.
    fn map_by_component<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Self::Component, Self::Scalar) -> Self::Scalar,
    {
        Self::from_fn(|c| f(c, self.get(c)))
    }

    /// Fallible elementwise transform into a new vector.
    fn try_map_by_component<E, F>(&self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(Self::Component, Self::Scalar) -> Result<Self::Scalar, E>,
    {
        Self::try_from_fn(|c| f(c, self.get(c)))
    }

    /// In-place elementwise transform.
    fn edit<F>(&mut self, f: F)
    where
        F: FnMut(Self::Scalar) -> Self::Scalar,
    {
        *self = self.map(f);
    }

    /// In-place elementwise transform that also sees the component key.
    fn edit_by_component<F>(&mut self, f: F)
    where
        F: FnMut(Self::Component, Self::Scalar) -> Self::Scalar,
    {
        *self = self.map_by_component(f);
    }

    /// Fallible in-place transform.
    ///
    /// All or nothing: if `f` fails for any component, `self` is untouched.
    fn try_edit<E, F>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(Self::Scalar) -> Result<Self::Scalar, E>,
    {
        self.try_edit_by_component(|_, value| f(value))
    }

    /// Fallible in-place transform that also sees the component key.
    ///
    /// All or nothing: if `f` fails for any component, `self` is untouched.
    fn try_edit_by_component<E, F>(&mut self, f: F) -> Result<(), E>
    where
        F: FnMut(Self::Component, Self::Scalar) -> Result<Self::Scalar, E>,
    {
        let edited = self.try_map_by_component(f)?;
        *self = edited;
        Ok(())
    }

    /// Elementwise transform into another scalar type.
    ///
    /// The result keeps this vector's key set; its zero comes from the
    /// target scalar's [`Zero`] strategy.
    fn transform<T, F>(&self, mut f: F) -> Transformed<Self::Component, T>
    where
        T: Zero,
        F: FnMut(Self::Scalar) -> T,
    {
        Transformed::from_fn(|c| f(self.get(c)))
    }

    /// Take the first `Self::count()` components of `source`, by position.
    ///
    /// # Panics
    ///
    /// Panics if `source` has fewer components than `Self`.
    fn truncating<S>(source: &S) -> Self
    where
        S: Vector<Scalar = Self::Scalar>,
    {
        assert!(
            S::count() >= Self::count(),
            "cannot truncate a {}-component vector into {} components",
            S::count(),
            Self::count()
        );
        Self::from_fn(|c| source.get(S::Component::nth(c.index())))
    }

    /// Copy components of `source` by position, filling trailing components
    /// `source` lacks with `missing`.
    fn components_of<S>(source: &S, missing: Self::Scalar) -> Self
    where
        S: Vector<Scalar = Self::Scalar>,
    {
        Self::from_fn(|c| {
            S::Component::try_nth(c.index()).map_or(missing, |source_component| {
                source.get(source_component)
            })
        })
    }

    /// Like [`truncating`](Vector::truncating), but `None` instead of a panic
    /// when `source` is too short.
    fn exactly_components_of<S>(source: &S) -> Option<Self>
    where
        S: Vector<Scalar = Self::Scalar>,
    {
        (S::count() >= Self::count()).then(|| Self::truncating(source))
    }

    /// Read the component at the same position as a key from another set.
    fn get_matching<C: Component>(&self, key: C) -> Option<Self::Scalar> {
        Self::Component::try_nth(key.index()).map(|c| self.get(c))
    }

    /// Write the component at the same position as a key from another set.
    ///
    /// Does nothing when this vector has no such position.
    fn set_matching<C: Component>(&mut self, key: C, value: Self::Scalar) {
        if let Some(component) = Self::Component::try_nth(key.index()) {
            self.set(component, value);
        }
    }
}

/// Two-component vectors.
pub trait Vector2: Vector {
    fn from_tuple((first, second): (Self::Scalar, Self::Scalar)) -> Self {
        let mut vector = Self::zero();
        vector.set(Self::Component::nth(0), first);
        vector.set(Self::Component::nth(1), second);
        vector
    }

    fn to_tuple(&self) -> (Self::Scalar, Self::Scalar) {
        (
            self.get(Self::Component::nth(0)),
            self.get(Self::Component::nth(1)),
        )
    }
}

/// Three-component vectors.
pub trait Vector3: Vector {
    fn from_tuple((first, second, third): (Self::Scalar, Self::Scalar, Self::Scalar)) -> Self {
        let mut vector = Self::zero();
        vector.set(Self::Component::nth(0), first);
        vector.set(Self::Component::nth(1), second);
        vector.set(Self::Component::nth(2), third);
        vector
    }

    fn to_tuple(&self) -> (Self::Scalar, Self::Scalar, Self::Scalar) {
        (
            self.get(Self::Component::nth(0)),
            self.get(Self::Component::nth(1)),
            self.get(Self::Component::nth(2)),
        )
    }
}

/// Componentwise arithmetic for floating-point vectors.
///
/// Blanket-implemented for every [`Vector`] with a [`FloatScalar`]; the
/// crate's own vector types also get the matching `std::ops` operators.
pub trait FloatVector: Vector {
    fn added(&self, other: &Self) -> Self;
    fn subtracted(&self, other: &Self) -> Self;
    fn multiplied(&self, other: &Self) -> Self;
    fn divided(&self, other: &Self) -> Self;
    fn scaled(&self, factor: Self::Scalar) -> Self;
    fn divided_by(&self, divisor: Self::Scalar) -> Self;

    /// Componentwise comparison within `tolerance`.
    fn approx_eq(&self, other: &Self, tolerance: Self::Scalar) -> bool;
}

impl<V> FloatVector for V
where
    V: Vector,
    V::Scalar: FloatScalar,
{
    fn added(&self, other: &Self) -> Self {
        self.map_by_component(|c, value| value + other.get(c))
    }

    fn subtracted(&self, other: &Self) -> Self {
        self.map_by_component(|c, value| value - other.get(c))
    }

    fn multiplied(&self, other: &Self) -> Self {
        self.map_by_component(|c, value| value * other.get(c))
    }

    fn divided(&self, other: &Self) -> Self {
        self.map_by_component(|c, value| value / other.get(c))
    }

    fn scaled(&self, factor: Self::Scalar) -> Self {
        self.map(|value| value * factor)
    }

    fn divided_by(&self, divisor: Self::Scalar) -> Self {
        self.map(|value| value / divisor)
    }

    fn approx_eq(&self, other: &Self, tolerance: Self::Scalar) -> bool {
        Self::components()
            .iter()
            .all(|&c| (self.get(c) - other.get(c)).abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};

    #[test]
    fn test_from_fn_reads_back() {
        let size = Size3D::from_fn(|c| match c {
            Extent3::Width => 4.0,
            Extent3::Height => 5.0,
            Extent3::Depth => 6.0,
        });
        assert_eq!(size.get(Extent3::Width), 4.0);
        assert_eq!(size.get(Extent3::Height), 5.0);
        assert_eq!(size.get(Extent3::Depth), 6.0);
        assert_eq!(size.values(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_try_from_fn_visits_in_order_and_short_circuits() {
        let mut visited = Vec::new();
        let result: Result<Point3D, &str> = Point3D::try_from_fn(|c| {
            visited.push(c);
            if c == Axis3::Y { Err("stop") } else { Ok(1.0) }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(visited, vec![Axis3::X, Axis3::Y]);
    }

    #[test]
    fn test_map_by_component() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        let doubled_z = p.map_by_component(|c, v| if c == Axis3::Z { v * 2.0 } else { v });
        assert_eq!(doubled_z, Point3D::new(1.0, 2.0, 6.0));
        assert_eq!(p.map(|v| v + 1.0), Point3D::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_try_edit_is_all_or_nothing() {
        let mut p = Point3D::new(1.0, 2.0, 3.0);
        let result = p.try_edit_by_component(|c, v| {
            if c == Axis3::Z { Err("z rejected") } else { Ok(v * 10.0) }
        });
        assert!(result.is_err());
        assert_eq!(p, Point3D::new(1.0, 2.0, 3.0));

        let result: Result<(), &str> = p.try_edit(|v| Ok(v * 10.0));
        assert!(result.is_ok());
        assert_eq!(p, Point3D::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_edit() {
        let mut p = Point::new(1.0, -2.0);
        p.edit(f64::abs);
        assert_eq!(p, Point::new(1.0, 2.0));
        p.edit_by_component(|c, v| if c == Axis2::X { 0.0 } else { v });
        assert_eq!(p, Point::new(0.0, 2.0));
    }

    #[test]
    fn test_transform_changes_scalar_type() {
        let p = Point3D::new(1.4, 2.6, -3.2);
        let rounded = p.transform(|v| v.round() as i32);
        assert_eq!(rounded.values(), vec![1, 3, -3]);
        assert_eq!(rounded.get(Axis3::Y), 3);
        assert_eq!(Transformed::<Axis3, i64>::zero().values(), vec![0, 0, 0]);
    }

    #[test]
    fn test_truncating_three_to_two() {
        let p = Point3D::new(7.0, 8.0, 9.0);
        let flat = Point::truncating(&p);
        assert_eq!(flat, Point::new(7.0, 8.0));

        let size = Size::truncating(&Size3D::new(10.0, 20.0, 30.0));
        assert_eq!(size, Size::new(10.0, 20.0));
    }

    #[test]
    #[should_panic(expected = "cannot truncate a 2-component vector into 3 components")]
    fn test_truncating_two_to_three_panics() {
        let _ = Point3D::truncating(&Point::new(1.0, 2.0));
    }

    #[test]
    fn test_components_of_fills_missing() {
        let p = Point3D::components_of(&Point::new(1.0, 2.0), 0.0);
        assert_eq!(p, Point3D::new(1.0, 2.0, 0.0));

        let s = Size3D::components_of(&Size::new(3.0, 4.0), 5.5);
        assert_eq!(s.depth, 5.5);
    }

    #[test]
    fn test_exactly_components_of() {
        assert_eq!(Point3D::exactly_components_of(&Point::new(1.0, 2.0)), None);

        let source = Point3D::new(1.0, 2.0, 3.0);
        let flat = Point::exactly_components_of(&source);
        assert_eq!(flat, Some(Point::truncating(&source)));
        assert_eq!(
            Vector3D::exactly_components_of(&source),
            Some(Vector3D::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn test_matching_by_position() {
        let mut size = Size::new(3.0, 4.0);
        assert_eq!(size.get_matching(Axis3::X), Some(3.0));
        assert_eq!(size.get_matching(Axis3::Y), Some(4.0));
        assert_eq!(size.get_matching(Axis3::Z), None);

        size.set_matching(Axis3::Z, 99.0);
        assert_eq!(size, Size::new(3.0, 4.0));
        size.set_matching(Extent3::Height, 8.0);
        assert_eq!(size, Size::new(3.0, 8.0));
    }

    #[test]
    fn test_tuple_constructors() {
        let p = <Point as Vector2>::from_tuple((1.0, 2.0));
        assert_eq!(p, Point::new(1.0, 2.0));
        let s = <Size3D as Vector3>::from_tuple((1.0, 2.0, 3.0));
        assert_eq!(Vector3::to_tuple(&s), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add_then_subtract_round_trips() {
        let a = Vector3D::new(0.1, -2.5, 1e6);
        let b = Vector3D::new(3.3, 0.7, -4.2);
        assert!(a.added(&b).subtracted(&b).approx_eq(&a, 1e-9));
    }

    #[test]
    fn test_scale_then_divide_round_trips() {
        let a = glam::Vec3::new(1.5, -2.0, 8.25);
        for k in [0.5_f32, 3.0, -7.0] {
            assert!(a.scaled(k).divided_by(k).approx_eq(&a, 1e-5));
        }
    }

    #[test]
    fn test_componentwise_multiply_and_divide() {
        let a = Size3D::new(2.0, 3.0, 4.0);
        let b = Size3D::new(0.5, 2.0, 4.0);
        assert_eq!(a.multiplied(&b), Size3D::new(1.0, 6.0, 16.0));
        assert_eq!(a.divided(&b), Size3D::new(4.0, 1.5, 1.0));
    }
}
