//! Configuration threaded through a layout pass.

use crate::envelopment::Adaptation;
use crate::space::CoordinateSpace;

/// Values a host supplies to every layout pass.
///
/// Containers read their inherited defaults from here instead of any global
/// state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutEnvironment {
    /// Adaptation used by envelopments that carry no override of their own.
    pub adaptation: Option<Adaptation>,
    /// Frame that gesture locations are correlated against.
    pub coordinate_space: CoordinateSpace,
}

impl LayoutEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inherited adaptation default.
    pub fn with_adaptation(mut self, adaptation: Adaptation) -> Self {
        self.adaptation = Some(adaptation);
        self
    }

    /// Set the coordinate space for gesture correlation.
    pub fn with_coordinate_space(mut self, space: CoordinateSpace) -> Self {
        self.coordinate_space = space;
        self
    }
}
