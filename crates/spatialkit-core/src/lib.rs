//! SpatialKit Core Library
//!
//! Layout helpers for 3D-aware containers: a component-keyed vector
//! abstraction, envelopment face geometry, and a marks overlay with stable
//! color assignment and gesture translation. Everything here produces plain
//! values for a host runtime to draw.

pub mod envelopment;
pub mod environment;
pub mod error;
pub mod gestures;
pub mod marks;
pub mod space;
pub mod vector;

pub use envelopment::{
    Adaptation, Envelopment, EnvelopmentBuilder, FaceGeometry, Faces, Layer, Placement,
};
pub use environment::LayoutEnvironment;
pub use error::{SpatialError, SpatialResult};
pub use gestures::{DragTracker, HoverTracker, SpatialTracker};
pub use marks::{
    DrawingCache, DrawnMark, Mark, MarkKey, Marks, MarksOverlay, Palette, PaletteColor,
};
pub use space::{CoordinateSpace, OverlayFrame, SpaceTransform};
pub use vector::{Component, FloatVector, Point3D, Size3D, Vector, Vector3D};
