//! Drag Controller for the embedded content window.
//!
//! `idle → dragging` on a press on the title bar, `dragging → idle` on a
//! release anywhere. While dragging, the window follows the pointer 1:1 at
//! `pointer - offset`, where `offset` is captured at press time.

use std::ops::Sub;

/// Viewport coordinates in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Drag state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        /// Pointer position relative to the window origin at press time
        offset: Point,
    },
}

/// Where the host should draw the content window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowPlacement {
    /// Absolute position; `None` keeps the default layout position.
    pub position: Option<Point>,
    pub dragging: bool,
}

/// Per-detail-view drag state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragController {
    phase: DragPhase,
    position: Option<Point>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed on the title bar while the window origin is `origin`.
    pub fn press(&mut self, pointer: Point, origin: Point) {
        self.phase = DragPhase::Dragging {
            offset: pointer - origin,
        };
    }

    /// Track the pointer; returns the new window position while dragging.
    pub fn move_to(&mut self, pointer: Point) -> Option<Point> {
        let DragPhase::Dragging { offset } = self.phase else {
            return None;
        };
        let position = pointer - offset;
        self.position = Some(position);
        Some(position)
    }

    /// End the drag. Returns whether a drag was in progress.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn placement(&self) -> WindowPlacement {
        WindowPlacement {
            position: self.position,
            dragging: self.is_dragging(),
        }
    }
}
