//! Stable color assignment for the marks currently present.

use super::{Mark, Marks, Palette, PaletteColor};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

/// Color and last drawn state of one key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheEntry {
    pub color: PaletteColor,
    pub mark: Mark,
}

/// Per-overlay key to color map.
///
/// A key keeps its color while it stays present. Freed colors queue up
/// behind the unused ones, and new keys take colors from the front of the
/// queue. Once the queue runs dry the whole palette is handed out again, so
/// colors repeat when more keys are live than the palette has colors. When
/// every key is gone the queue resets to the palette's original order.
#[derive(Debug, Clone)]
pub struct DrawingCache<K> {
    palette: Palette,
    available: VecDeque<PaletteColor>,
    entries: HashMap<K, CacheEntry>,
}

impl<K: Eq + Hash + Clone + fmt::Debug> Default for DrawingCache<K> {
    fn default() -> Self {
        Self::with_palette(Palette::default())
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug> DrawingCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            available: palette.colors().iter().copied().collect(),
            palette,
            entries: HashMap::new(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn color(&self, key: &K) -> Option<PaletteColor> {
        self.entries.get(key).map(|entry| entry.color)
    }

    pub fn entry(&self, key: &K) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Colors waiting to be assigned, front first.
    pub fn available(&self) -> impl Iterator<Item = PaletteColor> + '_ {
        self.available.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bring the cache in line with `marks`.
    pub fn update(&mut self, marks: &Marks<K>) {
        self.release_missing(marks);

        for (key, mark) in marks.sorted() {
            if let Some(entry) = self.entries.get_mut(key) {
                entry.mark = *mark;
                continue;
            }
            let color = self.next_color();
            log::debug!("assigned {:?} to {:?}", color, key);
            self.entries.insert(key.clone(), CacheEntry { color, mark: *mark });
        }
    }

    fn release_missing(&mut self, marks: &Marks<K>) {
        let mut freed = Vec::new();
        self.entries.retain(|key, entry| {
            let present = marks.contains(key);
            if !present {
                freed.push(entry.color);
            }
            present
        });

        if self.entries.is_empty() {
            self.reset();
            return;
        }

        // Entries come out of the map unordered; requeue in palette order.
        freed.sort_by_key(|color| self.palette.position(*color));
        for color in freed {
            if !self.available.contains(&color) {
                self.available.push_back(color);
            }
        }
    }

    fn next_color(&mut self) -> PaletteColor {
        if self.available.is_empty() {
            log::warn!(
                "all {} palette colors in use, reusing from the start",
                self.palette.colors().len()
            );
            self.reset();
        }
        self.available
            .pop_front()
            .unwrap_or_else(|| self.palette.first())
    }

    fn reset(&mut self) {
        self.available.clear();
        self.available.extend(self.palette.colors().iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Point3D;

    const RED: PaletteColor = PaletteColor::rgb(255, 0, 0);
    const GREEN: PaletteColor = PaletteColor::rgb(0, 255, 0);
    const BLUE: PaletteColor = PaletteColor::rgb(0, 0, 255);

    fn rgb_cache() -> DrawingCache<&'static str> {
        DrawingCache::with_palette(Palette::try_new(vec![RED, GREEN, BLUE]).unwrap())
    }

    fn at_depth(z: f64) -> Mark {
        Mark::point(Point3D::new(0.0, 0.0, z))
    }

    fn abc() -> Marks<&'static str> {
        [("a", at_depth(0.0)), ("b", at_depth(1.0)), ("c", at_depth(2.0))]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_assigns_in_render_order() {
        let mut cache = rgb_cache();
        cache.update(&abc());
        assert_eq!(cache.color(&"a"), Some(RED));
        assert_eq!(cache.color(&"b"), Some(GREEN));
        assert_eq!(cache.color(&"c"), Some(BLUE));
        assert_eq!(cache.available().count(), 0);
    }

    #[test]
    fn test_equal_depth_assigns_in_insertion_order() {
        for _ in 0..32 {
            let mut cache = rgb_cache();
            let mut marks = Marks::new();
            marks.insert("b", at_depth(0.0));
            marks.insert("a", at_depth(0.0));
            cache.update(&marks);
            assert_eq!(cache.color(&"b"), Some(RED));
            assert_eq!(cache.color(&"a"), Some(GREEN));
        }
    }

    #[test]
    fn test_freed_color_is_reused() {
        let mut cache = rgb_cache();
        let mut marks = abc();
        cache.update(&marks);

        marks.remove(&"b");
        marks.insert("d", at_depth(3.0));
        cache.update(&marks);

        assert_eq!(cache.color(&"d"), Some(GREEN));
        assert_eq!(cache.color(&"a"), Some(RED));
        assert_eq!(cache.color(&"c"), Some(BLUE));
        assert_eq!(cache.color(&"b"), None);
    }

    #[test]
    fn test_unused_colors_come_before_freed_ones() {
        let mut cache = DrawingCache::default();
        let mut marks = abc();
        cache.update(&marks);

        marks.remove(&"b");
        cache.update(&marks);
        marks.insert("d", at_depth(3.0));
        cache.update(&marks);

        let palette = Palette::default();
        assert_eq!(cache.color(&"d"), Some(palette.colors()[3]));
        assert_eq!(cache.available().last(), Some(palette.colors()[1]));
    }

    #[test]
    fn test_reset_when_emptied() {
        let mut cache = rgb_cache();
        let mut marks = abc();
        cache.update(&marks);

        marks.clear();
        cache.update(&marks);
        assert!(cache.is_empty());
        assert_eq!(cache.available().collect::<Vec<_>>(), vec![RED, GREEN, BLUE]);

        marks.insert("c", at_depth(0.0));
        cache.update(&marks);
        assert_eq!(cache.color(&"c"), Some(RED));
    }

    #[test]
    fn test_exhausted_palette_wraps() {
        let mut cache = DrawingCache::with_palette(Palette::try_new(vec![RED, GREEN]).unwrap());
        cache.update(&abc());
        assert_eq!(cache.color(&"a"), Some(RED));
        assert_eq!(cache.color(&"b"), Some(GREEN));
        assert_eq!(cache.color(&"c"), Some(RED));
        assert_eq!(cache.available().collect::<Vec<_>>(), vec![GREEN]);
    }

    #[test]
    fn test_retained_entries_refresh_mark() {
        let mut cache = rgb_cache();
        let mut marks = abc();
        cache.update(&marks);

        let moved = at_depth(9.0);
        marks.insert("a", moved);
        cache.update(&marks);

        let entry = cache.entry(&"a").unwrap();
        assert_eq!(entry.color, RED);
        assert_eq!(entry.mark, moved);
    }
}
