//! Content supplied per placement.

use super::Placement;
use std::collections::BTreeMap;

/// Content grouped by placement, in layering order.
#[derive(Debug, Clone, PartialEq)]
pub struct Faces<C> {
    entries: BTreeMap<Placement, Vec<C>>,
}

impl<C> Default for Faces<C> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<C> Faces<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EnvelopmentBuilder<C> {
        EnvelopmentBuilder::new()
    }

    /// Append content to a placement. Repeated pushes stack in call order.
    pub fn push(&mut self, placement: Placement, content: C) {
        self.entries.entry(placement).or_default().push(content);
    }

    /// Content for a placement; empty when none was supplied.
    pub fn get(&self, placement: Placement) -> &[C] {
        self.entries
            .get(&placement)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, placement: Placement) -> bool {
        !self.get(placement).is_empty()
    }

    /// Placements that have content, in layering order.
    pub fn placements(&self) -> Vec<Placement> {
        self.entries
            .iter()
            .filter(|(_, content)| !content.is_empty())
            .map(|(placement, _)| *placement)
            .collect()
    }

    /// Remove and return a placement's content.
    pub fn take(&mut self, placement: Placement) -> Vec<C> {
        self.entries.remove(&placement).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placement, &[C])> {
        self.entries
            .iter()
            .map(|(placement, content)| (*placement, content.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

/// Declarative assembly of [`Faces`].
///
/// ```
/// use spatialkit_core::envelopment::{Faces, Placement};
///
/// let show_floor = false;
/// let faces = Faces::builder()
///     .face(Placement::Back, "wall")
///     .face_if(show_floor, Placement::Bottom, || "floor")
///     .faces(Placement::Leading, ["shelf", "lamp"])
///     .build();
/// assert_eq!(faces.placements(), vec![Placement::Back, Placement::Leading]);
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopmentBuilder<C> {
    faces: Faces<C>,
}

impl<C> Default for EnvelopmentBuilder<C> {
    fn default() -> Self {
        Self {
            faces: Faces::default(),
        }
    }
}

impl<C> EnvelopmentBuilder<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn face(mut self, placement: Placement, content: C) -> Self {
        self.faces.push(placement, content);
        self
    }

    /// Add content only when `condition` holds.
    pub fn face_if(
        self,
        condition: bool,
        placement: Placement,
        content: impl FnOnce() -> C,
    ) -> Self {
        if condition {
            self.face(placement, content())
        } else {
            self
        }
    }

    pub fn faces(mut self, placement: Placement, contents: impl IntoIterator<Item = C>) -> Self {
        for content in contents {
            self.faces.push(placement, content);
        }
        self
    }

    /// In-place variant of [`face`](Self::face), for loops.
    pub fn push(&mut self, placement: Placement, content: C) {
        self.faces.push(placement, content);
    }

    pub fn build(self) -> Faces<C> {
        self.faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_groups_by_placement() {
        let faces = Faces::builder()
            .face(Placement::Top, 1)
            .face(Placement::Back, 2)
            .face(Placement::Top, 3)
            .build();
        assert_eq!(faces.get(Placement::Top), &[1, 3]);
        assert_eq!(faces.get(Placement::Back), &[2]);
        assert_eq!(faces.get(Placement::Front), &[] as &[i32]);
        // Layering order, not insertion order.
        assert_eq!(faces.placements(), vec![Placement::Back, Placement::Top]);
    }

    #[test]
    fn test_conditional_faces() {
        let mut builder = EnvelopmentBuilder::new();
        for (index, placement) in Placement::ALL.into_iter().enumerate() {
            builder = builder.face_if(index % 2 == 0, placement, || index);
        }
        let faces = builder.build();
        assert!(faces.contains(Placement::Back));
        assert!(!faces.contains(Placement::Front));
        assert_eq!(faces.placements().len(), 4);
    }

    #[test]
    fn test_take_removes_content() {
        let mut faces = Faces::builder()
            .faces(Placement::Leading, ["a", "b"])
            .build();
        assert_eq!(faces.take(Placement::Leading), vec!["a", "b"]);
        assert!(faces.take(Placement::Leading).is_empty());
        assert!(faces.is_empty());
    }
}
