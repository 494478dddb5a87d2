//! Translating input gestures into mark updates.
//!
//! Each tracker remembers only which key its input stream last used. An
//! active or changed event places the mark under that key, and ending or
//! cancelling the input removes it. Locations arrive in the coordinate space
//! the host recognized them in and are resolved into the overlay frame
//! first; events from spaces the overlay cannot correlate are dropped.

use crate::marks::{Mark, MarkKey, Marks, MarksOverlay};
use crate::space::{CoordinateSpace, OverlayFrame};
use crate::vector::{Point3D, Vector};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Hover gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HoverPhase {
    Active(Point),
    Ended,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverEvent {
    pub phase: HoverPhase,
    pub space: CoordinateSpace,
}

impl HoverEvent {
    pub fn active(location: Point, space: CoordinateSpace) -> Self {
        Self {
            phase: HoverPhase::Active(location),
            space,
        }
    }

    pub fn ended() -> Self {
        Self {
            phase: HoverPhase::Ended,
            space: CoordinateSpace::Local,
        }
    }
}

/// Keeps one hover mark under a per-session key.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    key: Option<MarkKey>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the current hover session, if one is running.
    pub fn key(&self) -> Option<&MarkKey> {
        self.key.as_ref()
    }

    pub fn handle(&mut self, event: &HoverEvent, overlay: &mut MarksOverlay<MarkKey>) {
        let (frame, marks) = overlay.split_mut();
        self.apply(event, frame, marks);
    }

    pub fn apply(
        &mut self,
        event: &HoverEvent,
        frame: &OverlayFrame,
        marks: &mut Marks<MarkKey>,
    ) {
        match event.phase {
            HoverPhase::Active(location) => {
                let Some(local) = resolve_planar(frame, location, &event.space, "hover") else {
                    return;
                };
                let key = self
                    .key
                    .get_or_insert_with(|| MarkKey::Hover(Uuid::new_v4()))
                    .clone();
                marks.insert(key, Mark::point(local));
            }
            HoverPhase::Ended => {
                if let Some(key) = self.key.take() {
                    marks.remove(&key);
                }
            }
        }
    }
}

/// Drag gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragPhase {
    Changed { location: Point },
    Ended,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragEvent {
    pub phase: DragPhase,
    pub space: CoordinateSpace,
}

impl DragEvent {
    pub fn changed(location: Point, space: CoordinateSpace) -> Self {
        Self {
            phase: DragPhase::Changed { location },
            space,
        }
    }

    pub fn ended() -> Self {
        Self {
            phase: DragPhase::Ended,
            space: CoordinateSpace::Local,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            phase: DragPhase::Cancelled,
            space: CoordinateSpace::Local,
        }
    }
}

/// Keeps one mark under the pointer for the duration of a drag.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    key: Option<MarkKey>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&MarkKey> {
        self.key.as_ref()
    }

    pub fn handle(&mut self, event: &DragEvent, overlay: &mut MarksOverlay<MarkKey>) {
        let (frame, marks) = overlay.split_mut();
        self.apply(event, frame, marks);
    }

    pub fn apply(
        &mut self,
        event: &DragEvent,
        frame: &OverlayFrame,
        marks: &mut Marks<MarkKey>,
    ) {
        match event.phase {
            DragPhase::Changed { location } => {
                let Some(local) = resolve_planar(frame, location, &event.space, "drag") else {
                    return;
                };
                let key = self
                    .key
                    .get_or_insert_with(|| MarkKey::Drag(Uuid::new_v4()))
                    .clone();
                marks.insert(key, Mark::point(local));
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                if let Some(key) = self.key.take() {
                    marks.remove(&key);
                }
            }
        }
    }
}

/// How a spatial event was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpatialEventKind {
    DirectTouch,
    IndirectPointer,
    Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpatialPhase {
    Active,
    Ended,
    Cancelled,
}

/// One input in a multi-input spatial event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialEvent {
    /// Stable for the lifetime of the input.
    pub id: u64,
    pub kind: SpatialEventKind,
    pub phase: SpatialPhase,
    pub location: Point3D,
    pub space: CoordinateSpace,
}

/// Keeps one mark per live spatial input.
#[derive(Debug, Clone, Default)]
pub struct SpatialTracker {
    active: HashSet<u64>,
}

impl SpatialTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, id: u64) -> bool {
        self.active.contains(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Apply a batch of events in order.
    pub fn handle<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a SpatialEvent>,
        overlay: &mut MarksOverlay<MarkKey>,
    ) {
        let (frame, marks) = overlay.split_mut();
        for event in events {
            self.apply(event, frame, marks);
        }
    }

    pub fn apply(
        &mut self,
        event: &SpatialEvent,
        frame: &OverlayFrame,
        marks: &mut Marks<MarkKey>,
    ) {
        let key = MarkKey::Spatial(event.id);
        match event.phase {
            SpatialPhase::Active => {
                let Some(local) = frame.resolve_3d(event.location, &event.space) else {
                    log::debug!("ignoring spatial event {} from {:?}", event.id, event.space);
                    return;
                };
                let mark = match event.kind {
                    SpatialEventKind::DirectTouch => Mark::touch(local),
                    SpatialEventKind::IndirectPointer | SpatialEventKind::Pointer => {
                        Mark::point(local)
                    }
                };
                self.active.insert(event.id);
                marks.insert(key, mark);
            }
            SpatialPhase::Ended | SpatialPhase::Cancelled => {
                self.active.remove(&event.id);
                marks.remove(&key);
            }
        }
    }

    /// Drop every live input and its mark.
    pub fn reset(&mut self, marks: &mut Marks<MarkKey>) {
        for id in self.active.drain() {
            marks.remove(&MarkKey::Spatial(id));
        }
    }
}

fn resolve_planar(
    frame: &OverlayFrame,
    location: Point,
    space: &CoordinateSpace,
    gesture: &str,
) -> Option<Point3D> {
    match frame.resolve(location, space) {
        Some(local) => Some(Point3D::components_of(&local, 0.0)),
        None => {
            log::debug!("ignoring {} at {:?} from {:?}", gesture, location, space);
            None
        }
    }
}
