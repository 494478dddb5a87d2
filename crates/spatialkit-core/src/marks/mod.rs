//! Marks overlay: keyed point annotations and their color assignment.

mod cache;
mod collection;
mod key;
mod mark;
mod overlay;
mod palette;

pub use cache::{CacheEntry, DrawingCache};
pub use collection::Marks;
pub use key::{MarkKey, MarkSource};
pub use mark::{Mark, MarkTag};
pub use overlay::{DrawnMark, MarksOverlay};
pub use palette::{Palette, PaletteColor};
