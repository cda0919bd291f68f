//! Container geometry and the drag-position clamp.
//!
//! All coordinates are CSS pixels relative to the text container's top-left
//! corner unless a name says otherwise (`client_*` values are relative to
//! the browser viewport, as reported by pointer events).

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in container or client space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, e.g. the container's measured bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a client-space point into coordinates relative to this rect.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        Point { x: client.x - self.left, y: client.y - self.top }
    }

    /// Whether `pt` lies inside this rect. Edges are inclusive.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x <= self.left + self.width && pt.y >= self.top && pt.y <= self.top + self.height
    }
}

/// Top-left position of a text box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

/// Compute where a dragged box lands for a pointer at `local`.
///
/// The pointer is offset by `anchor` so the box stays centered under the
/// cursor, then clamped so the assumed `box_w` x `box_h` box stays inside a
/// `container_w` x `container_h` container. When the container is smaller
/// than the box the lower bound wins: positions are never negative.
#[must_use]
pub fn drag_position(local: Point, anchor: Point, box_w: f64, box_h: f64, container_w: f64, container_h: f64) -> Position {
    Position {
        left: clamp_axis(local.x - anchor.x, container_w - box_w),
        top: clamp_axis(local.y - anchor.y, container_h - box_h),
    }
}

/// Clamp `value` to `[0, max]`, preferring 0 when `max` is negative.
fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}
