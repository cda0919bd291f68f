#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{Snapshot, TextBoxId};
use crate::geometry::{Point, Rect};

/// Bounds of a box at (`top`, `left`) with the assumed size.
#[must_use]
pub fn box_bounds(top: f64, left: f64, box_w: f64, box_h: f64) -> Rect {
    Rect::new(left, top, box_w, box_h)
}

/// Return the topmost box whose assumed `box_w` x `box_h` bounds contain
/// `local_pt`. Later boxes are drawn above earlier ones, so they win.
#[must_use]
pub fn hit_test(local_pt: Point, snapshot: &Snapshot, box_w: f64, box_h: f64) -> Option<TextBoxId> {
    snapshot
        .boxes()
        .iter()
        .rev()
        .find(|b| box_bounds(b.top, b.left, box_w, box_h).contains(local_pt))
        .map(|b| b.id)
}
