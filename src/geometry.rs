#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in page space, in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `from` to `self`.
    #[must_use]
    pub fn delta_from(self, from: Point) -> (f64, f64) {
        (self.x - from.x, self.y - from.y)
    }
}

/// A layout size in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

impl LogicalSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero, negative or not a number.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// A backing-buffer size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

impl BackingSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert back to logical pixels for a given device pixel ratio and pixel size.
    #[must_use]
    pub fn to_logical(self, dpr: f64, pixel_size: u32) -> LogicalSize {
        let scale = f64::from(pixel_size) / effective_dpr(dpr);
        LogicalSize::new(f64::from(self.width) * scale, f64::from(self.height) * scale)
    }
}

/// The device pixel ratio to compute with: the reported one when it is a
/// positive finite number, otherwise 1.0.
#[must_use]
pub fn effective_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}
