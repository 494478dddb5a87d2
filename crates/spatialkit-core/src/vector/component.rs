//! Closed component-key sets for vectors.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// A closed, ordered set of component keys.
///
/// `ALL` lists the keys in declared order; a key's position in that list is
/// what cross-type conversions and matching use.
pub trait Component: Copy + Eq + Hash + Debug + 'static {
    /// Every key, in declared order.
    const ALL: &'static [Self];

    /// Position of this key in declared order.
    fn index(self) -> usize;

    /// Lowercase display name.
    fn name(self) -> &'static str;

    /// The key at `index`, if the key space has one.
    fn try_nth(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The key at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` lies outside the key space. Positions are only ever
    /// derived from another key set's declared order, so an out-of-range
    /// position is a programming error.
    fn nth(index: usize) -> Self {
        match Self::try_nth(index) {
            Some(component) => component,
            None => panic!(
                "component position {} is outside the {}-key space of {}",
                index,
                Self::ALL.len(),
                std::any::type_name::<Self>()
            ),
        }
    }
}

macro_rules! component_set {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl Component for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

component_set! {
    /// Keys of a planar point or vector.
    Axis2 { X => "x", Y => "y" }
}

component_set! {
    /// Keys of a spatial point or vector.
    Axis3 { X => "x", Y => "y", Z => "z" }
}

component_set! {
    /// Keys of a planar size.
    Extent2 { Width => "width", Height => "height" }
}

component_set! {
    /// Keys of a volumetric size.
    Extent3 { Width => "width", Height => "height", Depth => "depth" }
}
