#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::ViewBounds;
use crate::config::ObserveMode;

// =============================================================
// Helpers
// =============================================================

struct FakeSurface {
    container: LogicalSize,
    backing: BackingSize,
}

impl FakeSurface {
    fn with_container(width: f64, height: f64) -> Self {
        Self { container: LogicalSize::new(width, height), backing: BackingSize::new(300, 150) }
    }
}

impl DrawingSurface for FakeSurface {
    fn container_size(&self) -> LogicalSize {
        self.container
    }

    fn backing_size(&self) -> BackingSize {
        self.backing
    }

    fn set_backing_size(&mut self, size: BackingSize) {
        self.backing = size;
    }

    fn set_display_size(&mut self, _width: &str, _height: &str) {}
}

fn fixed_pixel_config() -> ViewportConfig {
    ViewportConfig { pixel_size: Some(1), observe: ObserveMode::WindowResize, ..ViewportConfig::default() }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_controller_has_no_backing_and_default_camera() {
    let controller = ViewportController::default();
    assert_eq!(controller.backing(), BackingSize::default());
    assert_eq!(controller.camera.zoom, 1.0);
    assert_eq!(controller.dpr, 1.0);
}

#[test]
fn config_half_extent_reaches_camera() {
    let config = ViewportConfig { half_extent: 5.0, ..ViewportConfig::default() };
    let controller = ViewportController::new(config);
    assert_eq!(controller.camera.half_extent, 5.0);
}

// =============================================================
// Sizing and the resized flag
// =============================================================

#[test]
fn resize_records_dpr_and_backing() {
    let mut controller = ViewportController::new(fixed_pixel_config());
    let mut surface = FakeSurface::with_container(801.0, 600.0);

    let outcome = controller.resize(&mut surface, None, 2.0);

    assert_eq!(outcome.backing, BackingSize::new(1602, 1200));
    assert_eq!(controller.backing(), BackingSize::new(1602, 1200));
    assert_eq!(controller.dpr, 2.0);
    assert_eq!(controller.logical_size(), LogicalSize::new(801.0, 600.0));
}

#[test]
fn logical_size_accounts_for_pixel_size() {
    let mut controller = ViewportController::default();
    let mut surface = FakeSurface::with_container(801.0, 600.0);
    controller.resize(&mut surface, None, 2.0);

    assert_eq!(controller.backing(), BackingSize::new(801, 600));
    assert_eq!(controller.logical_size(), LogicalSize::new(801.0, 600.0));
}

#[test]
fn take_resized_fires_once_per_change() {
    let mut controller = ViewportController::new(fixed_pixel_config());
    let mut surface = FakeSurface::with_container(640.0, 480.0);

    assert!(!controller.take_resized());
    controller.resize(&mut surface, None, 1.0);
    assert!(controller.take_resized());
    assert!(!controller.take_resized());

    controller.resize(&mut surface, None, 1.0);
    assert!(!controller.take_resized());

    surface.container = LogicalSize::new(700.0, 480.0);
    controller.resize(&mut surface, None, 1.0);
    assert!(controller.take_resized());
}

#[test]
fn resized_flag_is_sticky_until_taken() {
    let mut controller = ViewportController::new(fixed_pixel_config());
    let mut surface = FakeSurface::with_container(640.0, 480.0);
    controller.resize(&mut surface, None, 1.0);
    // Unchanged pass must not clear a pending change.
    controller.resize(&mut surface, None, 1.0);
    assert!(controller.take_resized());
}

#[test]
fn observe_uses_device_pixels_directly() {
    let mut controller = ViewportController::default();
    let mut surface = FakeSurface::with_container(0.0, 0.0);

    let outcome = controller.observe(
        &mut surface,
        None,
        ObservedBox::DevicePixelContentBox { inline: 1602.0, block: 1200.0 },
        2.0,
    );

    assert!(outcome.changed);
    assert_eq!(controller.backing(), BackingSize::new(1602, 1200));
    assert_eq!(controller.logical_size(), LogicalSize::new(801.0, 600.0));
    assert!(controller.take_resized());
}

#[test]
fn fixed_pixel_size_gives_same_backing_on_both_paths() {
    let config = ViewportConfig::from_json(r#"{"pixelSize":2}"#).expect("config");

    let mut measured = ViewportController::new(config.clone());
    let mut surface = FakeSurface::with_container(801.0, 600.0);
    measured.resize(&mut surface, None, 2.0);

    let mut observed = ViewportController::new(config);
    let mut observed_surface = FakeSurface::with_container(0.0, 0.0);
    observed.observe(&mut observed_surface, None, ObservedBox::ContentBox { inline: 801.0, block: 600.0 }, 2.0);

    assert_eq!(measured.backing(), BackingSize::new(801, 600));
    assert_eq!(observed.backing(), measured.backing());
    assert_eq!(observed.logical_size(), measured.logical_size());
    assert_eq!(observed.projection_array(), measured.projection_array());
}

// =============================================================
// Camera
// =============================================================

#[test]
fn apply_drag_pans_camera() {
    let mut controller = ViewportController::default();
    controller.apply_drag(5.0, 8.0);
    controller.apply_drag(-7.0, 0.0);
    assert_eq!(controller.camera.pan_x, -2.0);
    assert_eq!(controller.camera.pan_y, 8.0);
}

#[test]
fn zoom_by_respects_config_limits() {
    let config = ViewportConfig { min_zoom: 0.5, max_zoom: 2.0, ..ViewportConfig::default() };
    let mut controller = ViewportController::new(config);
    controller.zoom_by(10.0);
    assert_eq!(controller.camera.zoom, 2.0);
    controller.zoom_by(0.01);
    assert_eq!(controller.camera.zoom, 0.5);
}

#[test]
fn projection_uses_current_logical_size() {
    let mut controller = ViewportController::new(fixed_pixel_config());
    let mut surface = FakeSurface::with_container(800.0, 400.0);
    controller.resize(&mut surface, None, 2.0);

    let bounds = controller.camera.view_bounds(controller.logical_size());
    assert_eq!(bounds, ViewBounds { left: -4.0, right: 4.0, bottom: -2.0, top: 2.0 });

    let cols = controller.projection_array();
    assert!((cols[0] - 0.25).abs() < 1e-6);
    assert!((cols[5] - 0.5).abs() < 1e-6);
}
