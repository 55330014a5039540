use glam::Mat4;

use crate::camera::PanCamera;
use crate::config::ViewportConfig;
use crate::consts::MIN_PIXEL_SIZE;
use crate::geometry::{BackingSize, LogicalSize};
use crate::sizer::{DrawingSurface, ObservedBox, RenderViewport, ResizeOutcome, ViewportSizer};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Viewport state shared by one canvas and its render loop.
///
/// Owns everything the render loop reads each frame (backing size, camera)
/// and everything the event handlers write. Holds no browser handles, so it
/// can be tested without WASM; [`crate::web::WebViewport`] wraps it for the page.
pub struct ViewportController {
    pub config: ViewportConfig,
    pub sizer: ViewportSizer,
    pub camera: PanCamera,
    pub dpr: f64,
    pixel_size: u32,
    resized: bool,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            sizer: ViewportSizer::new(config.pixel_size),
            camera: PanCamera::with_half_extent(config.half_extent),
            config,
            dpr: 1.0,
            pixel_size: MIN_PIXEL_SIZE,
            resized: false,
        }
    }

    // --- Sizing ---

    /// Measure the surface's container and resize the surface.
    pub fn resize<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        viewport: Option<&mut dyn RenderViewport>,
        dpr: f64,
    ) -> ResizeOutcome {
        self.dpr = dpr;
        let outcome = self.sizer.resize(surface, viewport, dpr);
        self.record(outcome)
    }

    /// Apply a layout-change notification to the surface.
    pub fn observe<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        viewport: Option<&mut dyn RenderViewport>,
        observation: ObservedBox,
        dpr: f64,
    ) -> ResizeOutcome {
        self.dpr = dpr;
        let outcome = self.sizer.observe(surface, viewport, observation, dpr);
        self.record(outcome)
    }

    fn record(&mut self, outcome: ResizeOutcome) -> ResizeOutcome {
        self.pixel_size = outcome.pixel_size;
        if outcome.changed {
            self.resized = true;
        }
        outcome
    }

    /// Whether the backing size changed since the last call. Clears the flag.
    ///
    /// Hosts that keep size-dependent GPU resources (a depth texture, say)
    /// recreate them when this returns true.
    pub fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    // --- Camera ---

    /// Accumulate a drag delta into the camera.
    pub fn apply_drag(&mut self, dx: f64, dy: f64) {
        self.camera.apply_drag(dx, dy);
    }

    /// Scale zoom within the configured limits.
    pub fn zoom_by(&mut self, factor: f64) {
        self.camera.zoom_by(factor, self.config.min_zoom, self.config.max_zoom);
    }

    // --- Queries ---

    #[must_use]
    pub fn backing(&self) -> BackingSize {
        self.sizer.backing()
    }

    /// Backing size expressed in logical pixels.
    #[must_use]
    pub fn logical_size(&self) -> LogicalSize {
        self.backing().to_logical(self.dpr, self.pixel_size)
    }

    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.camera.projection(self.logical_size())
    }

    /// Projection as 16 column-major floats, ready for a uniform upload.
    #[must_use]
    pub fn projection_array(&self) -> [f32; 16] {
        self.projection().to_cols_array()
    }
}
