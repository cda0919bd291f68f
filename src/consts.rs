//! Shared constants for the editor crate.

// ── Text box geometry ───────────────────────────────────────────

/// Assumed width of a rendered text box in CSS pixels.
///
/// Boxes are never measured; dragging and hit-testing use this size.
pub const BOX_WIDTH_PX: f64 = 100.0;

/// Assumed height of a rendered text box in CSS pixels.
pub const BOX_HEIGHT_PX: f64 = 40.0;

// ── New boxes ───────────────────────────────────────────────────

/// Initial top offset of a newly added box.
pub const SPAWN_TOP_PX: f64 = 50.0;

/// Initial left offset of a newly added box.
pub const SPAWN_LEFT_PX: f64 = 50.0;

/// Placeholder content of a newly added box.
pub const DEFAULT_CONTENT: &str = "New Text";

// ── Selection border ────────────────────────────────────────────

/// Border of the active (selected or dragged) box.
pub const ACTIVE_BORDER: &str = "2px solid blue";

/// Border of every other box.
pub const INACTIVE_BORDER: &str = "1px solid black";
