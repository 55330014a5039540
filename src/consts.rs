//! Shared numeric defaults for the viewport crate.

// ── Sizing ──────────────────────────────────────────────────────

/// Smallest number of device pixels per rendering pixel.
pub const MIN_PIXEL_SIZE: u32 = 1;

/// Products within this distance of an integer snap to it before flooring,
/// so `0.29 * 100.0` counts as 29 device pixels rather than 28.
pub const PIXEL_SNAP_EPSILON: f64 = 1e-6;

// ── Camera ──────────────────────────────────────────────────────

/// Half-height of the visible world volume at zoom 1.0.
pub const DEFAULT_HALF_EXTENT: f64 = 2.0;

/// Lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;
