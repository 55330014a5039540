//! Viewport configuration supplied by the host page as JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_HALF_EXTENT, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use crate::error::ViewportError;

/// How the controller learns that the canvas changed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObserveMode {
    /// `ResizeObserver` on the canvas content box, exact when the browser
    /// reports device-pixel sizes.
    #[default]
    ResizeObserver,
    /// Measure the parent container on every window `resize` event.
    WindowResize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportConfig {
    /// Device pixels per rendering pixel. Absent means `max(1, round(dpr))`
    /// when measuring the container and full device resolution when observed.
    pub pixel_size: Option<u32>,
    pub observe: ObserveMode,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// World half-height visible at zoom 1.0.
    pub half_extent: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            pixel_size: None,
            observe: ObserveMode::default(),
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            half_extent: DEFAULT_HALF_EXTENT,
        }
    }
}

impl ViewportConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::ConfigParse`] for malformed JSON and
    /// [`ViewportError::ConfigValue`] for out-of-range fields.
    pub fn from_json(raw: &str) -> Result<Self, ViewportError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::ConfigValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ViewportError> {
        if self.pixel_size == Some(0) {
            return Err(ViewportError::ConfigValue { field: "pixelSize", reason: "must be at least 1" });
        }
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            return Err(ViewportError::ConfigValue { field: "minZoom", reason: "must be positive" });
        }
        if !self.max_zoom.is_finite() || self.max_zoom < self.min_zoom {
            return Err(ViewportError::ConfigValue { field: "maxZoom", reason: "must be at least minZoom" });
        }
        if !(self.half_extent.is_finite() && self.half_extent > 0.0) {
            return Err(ViewportError::ConfigValue { field: "halfExtent", reason: "must be positive" });
        }
        Ok(())
    }
}
