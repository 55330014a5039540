//! Viewport sizing: keep a drawing surface's backing buffer aligned 1:1 with
//! device pixels.
//!
//! Two entry points share this module. [`ViewportSizer::resize`] measures the
//! surface's parent container in logical pixels and derives every size from
//! the device pixel ratio, flooring at each step so the backing buffer never
//! asks for more device pixels than exist. [`ViewportSizer::observe`] consumes
//! a layout-change notification instead, preferring an exact device-pixel box
//! and otherwise falling back to rounding `logical * dpr`, which is the best
//! available approximation rather than a guarantee.

#[cfg(test)]
#[path = "sizer_test.rs"]
mod sizer_test;

use crate::consts::{MIN_PIXEL_SIZE, PIXEL_SNAP_EPSILON};
use crate::geometry::{BackingSize, LogicalSize, effective_dpr};

/// A drawing surface whose backing buffer and displayed size can be set.
pub trait DrawingSurface {
    /// Displayed size of the surface's parent container, in logical pixels.
    fn container_size(&self) -> LogicalSize;

    /// Current backing-buffer size.
    fn backing_size(&self) -> BackingSize;

    /// Replace the backing-buffer size.
    fn set_backing_size(&mut self, size: BackingSize);

    /// Set the displayed size as CSS lengths (e.g. `"801px"`).
    fn set_display_size(&mut self, width: &str, height: &str);
}

/// A rendering viewport that restricts where drawing commands write.
pub trait RenderViewport {
    /// Set the viewport rectangle in backing-buffer pixels.
    fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32);
}

/// Default number of device pixels per rendering pixel: `max(1, round(dpr))`.
#[must_use]
pub fn default_pixel_size(dpr: f64) -> u32 {
    let rounded = effective_dpr(dpr).round();
    if rounded <= f64::from(MIN_PIXEL_SIZE) {
        MIN_PIXEL_SIZE
    } else {
        clamp_to_u32(rounded)
    }
}

/// Format a logical length as a CSS pixel length.
#[must_use]
pub fn css_px(value: f64) -> String {
    format!("{value}px")
}

/// Every intermediate of one sizing computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizerLayout {
    /// Device pixels per rendering pixel used for this layout.
    pub pixel_size: u32,
    /// Whole device pixels available across the container.
    pub device_width: u32,
    /// Whole device pixels available down the container.
    pub device_height: u32,
    /// Rendering pixels across; the backing-buffer width.
    pub pixels_across: u32,
    /// Rendering pixels down; the backing-buffer height.
    pub pixels_down: u32,
    /// Device pixels actually covered horizontally (`pixels_across * pixel_size`).
    pub device_pixels_across: u32,
    /// Device pixels actually covered vertically (`pixels_down * pixel_size`).
    pub device_pixels_down: u32,
    /// Displayed width in logical pixels, aligned to the device grid.
    pub css_width: f64,
    /// Displayed height in logical pixels, aligned to the device grid.
    pub css_height: f64,
}

impl SizerLayout {
    /// Compute the layout for a container of `container` logical pixels.
    ///
    /// A `pixel_size` of zero is treated as one.
    #[must_use]
    pub fn compute(container: LogicalSize, dpr: f64, pixel_size: u32) -> Self {
        let dpr = effective_dpr(dpr);
        let pixel_size = pixel_size.max(MIN_PIXEL_SIZE);
        let device_width = floor_to_pixels(container.width * dpr);
        let device_height = floor_to_pixels(container.height * dpr);
        let pixels_across = device_width / pixel_size;
        let pixels_down = device_height / pixel_size;
        let device_pixels_across = pixels_across * pixel_size;
        let device_pixels_down = pixels_down * pixel_size;
        Self {
            pixel_size,
            device_width,
            device_height,
            pixels_across,
            pixels_down,
            device_pixels_across,
            device_pixels_down,
            css_width: f64::from(device_pixels_across) / dpr,
            css_height: f64::from(device_pixels_down) / dpr,
        }
    }

    /// The backing-buffer size this layout asks for.
    #[must_use]
    pub fn backing(&self) -> BackingSize {
        BackingSize::new(self.pixels_across, self.pixels_down)
    }
}

/// One layout-change notification for an observed surface.
///
/// Variants are listed in order of preference: hosts should report the most
/// precise measurement they have.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObservedBox {
    /// Content box already measured in device pixels. Exact.
    DevicePixelContentBox { inline: f64, block: f64 },
    /// Content box in logical pixels. Needs scaling by the device pixel ratio.
    ContentBox { inline: f64, block: f64 },
    /// Legacy content rectangle in logical pixels.
    ContentRect { width: f64, height: f64 },
}

impl ObservedBox {
    /// Whether this measurement is exact in device pixels.
    #[must_use]
    pub fn is_exact(self) -> bool {
        matches!(self, Self::DevicePixelContentBox { .. })
    }

    /// Backing size this notification calls for.
    ///
    /// The logical variants round `size * dpr`, which can be off by one device
    /// pixel when the browser's own layout rounding differs.
    #[must_use]
    pub fn display_size(self, dpr: f64) -> BackingSize {
        let (width, height, scale) = match self {
            Self::DevicePixelContentBox { inline, block } => (inline, block, 1.0),
            Self::ContentBox { inline, block } => (inline, block, effective_dpr(dpr)),
            Self::ContentRect { width, height } => (width, height, effective_dpr(dpr)),
        };
        BackingSize::new(round_to_pixels(width * scale), round_to_pixels(height * scale))
    }
}

/// Result of one sizing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOutcome {
    /// Backing size after the pass.
    pub backing: BackingSize,
    /// Device pixels per backing pixel used by the pass.
    pub pixel_size: u32,
    /// Whether the backing size differs from what the surface had before.
    pub changed: bool,
}

/// Resize the backing buffer to `display` if it differs. Returns whether it changed.
pub fn resize_to_display_size<S: DrawingSurface + ?Sized>(surface: &mut S, display: BackingSize) -> bool {
    let need_resize = surface.backing_size() != display;
    if need_resize {
        surface.set_backing_size(display);
    }
    need_resize
}

/// Sizing state for one drawing surface.
///
/// The surface itself is borrowed per call; it belongs to the host document.
#[derive(Debug, Clone, Default)]
pub struct ViewportSizer {
    pixel_size: Option<u32>,
    backing: BackingSize,
}

impl ViewportSizer {
    /// Create a sizer. `None` derives the pixel size from the device pixel ratio
    /// on every pass; a fixed size of zero is treated as one.
    #[must_use]
    pub fn new(pixel_size: Option<u32>) -> Self {
        Self { pixel_size: pixel_size.map(|p| p.max(MIN_PIXEL_SIZE)), backing: BackingSize::default() }
    }

    /// Pixel size a pass at `dpr` would use.
    #[must_use]
    pub fn pixel_size_for(&self, dpr: f64) -> u32 {
        self.pixel_size.unwrap_or_else(|| default_pixel_size(dpr))
    }

    /// Backing size produced by the most recent pass.
    #[must_use]
    pub fn backing(&self) -> BackingSize {
        self.backing
    }

    /// Measure the surface's container and size the surface to match.
    ///
    /// Sets the displayed size so the box stays on the device grid, the
    /// backing buffer to whole rendering pixels, and the viewport (if any) to
    /// cover the whole backing buffer.
    pub fn resize<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        viewport: Option<&mut dyn RenderViewport>,
        dpr: f64,
    ) -> ResizeOutcome {
        let layout = SizerLayout::compute(surface.container_size(), dpr, self.pixel_size_for(dpr));
        let backing = layout.backing();
        let changed = surface.backing_size() != backing;

        surface.set_display_size(&css_px(layout.css_width), &css_px(layout.css_height));
        surface.set_backing_size(backing);
        if let Some(viewport) = viewport {
            viewport.set_viewport(0, 0, backing.width, backing.height);
        }
        self.backing = backing;

        if changed {
            log::debug!(
                "viewport: resized backing to {}x{} (pixel size {}, dpr {dpr})",
                backing.width,
                backing.height,
                layout.pixel_size
            );
        }
        ResizeOutcome { backing, pixel_size: layout.pixel_size, changed }
    }

    /// Apply a layout-change notification.
    ///
    /// Only the backing buffer is touched; the displayed size is whatever the
    /// layout already decided. A fixed pixel size divides the observed device
    /// pixels down, dropping partial rendering pixels as [`Self::resize`] does.
    /// Without one, an observed surface renders at full device resolution.
    pub fn observe<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        viewport: Option<&mut dyn RenderViewport>,
        observation: ObservedBox,
        dpr: f64,
    ) -> ResizeOutcome {
        let device = observation.display_size(dpr);
        let pixel_size = self.pixel_size.unwrap_or(MIN_PIXEL_SIZE);
        let display = BackingSize::new(device.width / pixel_size, device.height / pixel_size);
        let changed = resize_to_display_size(surface, display);
        if let Some(viewport) = viewport {
            viewport.set_viewport(0, 0, display.width, display.height);
        }
        self.backing = display;

        if changed {
            log::debug!(
                "viewport: observed {}x{} (pixel size {pixel_size}, exact: {})",
                display.width,
                display.height,
                observation.is_exact()
            );
        }
        ResizeOutcome { backing: display, pixel_size, changed }
    }
}

/// Floor a device-pixel measurement, snapping float noise to the nearest integer first.
fn floor_to_pixels(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let nearest = value.round();
    if (value - nearest).abs() < PIXEL_SNAP_EPSILON {
        clamp_to_u32(nearest)
    } else {
        clamp_to_u32(value.floor())
    }
}

fn round_to_pixels(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    clamp_to_u32(value.round())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_to_u32(whole: f64) -> u32 {
    if whole >= f64::from(u32::MAX) {
        u32::MAX
    } else if whole <= 0.0 {
        0
    } else {
        whole as u32
    }
}
