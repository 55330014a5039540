#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use glam::Mat4;

use crate::consts::DEFAULT_HALF_EXTENT;
use crate::geometry::LogicalSize;

/// Visible world rectangle for an orthographic projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// Accumulated pan/zoom state fed by drag deltas.
///
/// `pan_x` / `pan_y` are in logical pixels, screen-down positive.
/// `zoom` is a scale factor (1.0 = no zoom).
/// `half_extent` is the world half-height visible at zoom 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanCamera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    pub half_extent: f64,
}

impl Default for PanCamera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0, half_extent: DEFAULT_HALF_EXTENT }
    }
}

impl PanCamera {
    #[must_use]
    pub fn with_half_extent(half_extent: f64) -> Self {
        Self { half_extent, ..Self::default() }
    }

    /// Accumulate a drag delta.
    pub fn apply_drag(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Multiply zoom by `factor`, clamped to `[min, max]`.
    ///
    /// Non-finite or non-positive factors leave the camera unchanged.
    pub fn zoom_by(&mut self, factor: f64, min: f64, max: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// World units covered by one logical pixel of `viewport` height.
    #[must_use]
    pub fn world_per_pixel(&self, viewport: LogicalSize) -> f64 {
        if viewport.is_degenerate() {
            return 0.0;
        }
        2.0 * self.half_extent / self.zoom / viewport.height
    }

    /// The world rectangle visible through `viewport`.
    ///
    /// Dragging right moves the scene right, so the view centre moves left.
    #[must_use]
    pub fn view_bounds(&self, viewport: LogicalSize) -> ViewBounds {
        let aspect = if viewport.is_degenerate() { 1.0 } else { viewport.width / viewport.height };
        let half_h = self.half_extent / self.zoom;
        let half_w = half_h * aspect;
        let scale = self.world_per_pixel(viewport);
        let cx = -self.pan_x * scale;
        let cy = self.pan_y * scale;
        ViewBounds { left: cx - half_w, right: cx + half_w, bottom: cy - half_h, top: cy + half_h }
    }

    /// Column-major orthographic projection for `viewport`, OpenGL depth range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn projection(&self, viewport: LogicalSize) -> Mat4 {
        let b = self.view_bounds(viewport);
        Mat4::orthographic_rh_gl(b.left as f32, b.right as f32, b.bottom as f32, b.top as f32, -1.0, 1.0)
    }
}
