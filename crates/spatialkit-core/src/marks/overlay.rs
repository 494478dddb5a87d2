//! A marks collection bound to its drawing cache and coordinate frame.

use super::{DrawingCache, Mark, MarkTag, Marks, Palette, PaletteColor};
use crate::environment::LayoutEnvironment;
use crate::space::OverlayFrame;
use crate::vector::Point3D;
use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// One mark as it should be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawnMark<K> {
    pub key: K,
    pub position: Point3D,
    pub diameter: f64,
    pub color: PaletteColor,
    pub tag: Option<MarkTag>,
}

/// Marks overlay state owned by one view.
#[derive(Debug, Clone)]
pub struct MarksOverlay<K> {
    marks: Marks<K>,
    cache: DrawingCache<K>,
    frame: OverlayFrame,
}

impl<K: Eq + Hash + Clone + fmt::Debug> MarksOverlay<K> {
    pub fn new(frame: OverlayFrame) -> Self {
        Self {
            marks: Marks::new(),
            cache: DrawingCache::new(),
            frame,
        }
    }

    /// Overlay drawn in the environment's coordinate space.
    pub fn from_environment(env: &LayoutEnvironment) -> Self {
        Self::new(OverlayFrame::new(env.coordinate_space.clone()))
    }

    /// Replace the palette. Clears any assigned colors.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.cache = DrawingCache::with_palette(palette);
        self
    }

    pub fn marks(&self) -> &Marks<K> {
        &self.marks
    }

    pub fn marks_mut(&mut self) -> &mut Marks<K> {
        &mut self.marks
    }

    pub fn frame(&self) -> &OverlayFrame {
        &self.frame
    }

    pub fn set_frame(&mut self, frame: OverlayFrame) {
        self.frame = frame;
    }

    pub fn cache(&self) -> &DrawingCache<K> {
        &self.cache
    }

    /// Frame and marks together, for gesture handlers.
    pub fn split_mut(&mut self) -> (&OverlayFrame, &mut Marks<K>) {
        (&self.frame, &mut self.marks)
    }

    /// Run a render pass: sync the cache and list the marks back to front.
    pub fn render(&mut self) -> Vec<DrawnMark<K>> {
        self.cache.update(&self.marks);
        self.marks
            .sorted()
            .into_iter()
            .filter_map(|(key, mark)| {
                let color = self.cache.color(key)?;
                Some(drawn(key.clone(), mark, color))
            })
            .collect()
    }
}

fn drawn<K>(key: K, mark: &Mark, color: PaletteColor) -> DrawnMark<K> {
    DrawnMark {
        key,
        position: mark.position(),
        diameter: mark.diameter(),
        color,
        tag: mark.tag(),
    }
}
