#![allow(clippy::float_cmp)]

use glam::Vec4;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn square() -> LogicalSize {
    LogicalSize::new(400.0, 400.0)
}

// --- Defaults ---

#[test]
fn camera_default_is_identity_pan_and_zoom() {
    let cam = PanCamera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.half_extent, DEFAULT_HALF_EXTENT);
}

#[test]
fn default_bounds_match_two_unit_volume() {
    let b = PanCamera::default().view_bounds(square());
    assert_eq!(b, ViewBounds { left: -2.0, right: 2.0, bottom: -2.0, top: 2.0 });
}

// --- Drag accumulation ---

#[test]
fn apply_drag_accumulates() {
    let mut cam = PanCamera::default();
    cam.apply_drag(5.0, 8.0);
    cam.apply_drag(-7.0, 0.0);
    assert_eq!(cam.pan_x, -2.0);
    assert_eq!(cam.pan_y, 8.0);
}

#[test]
fn drag_right_moves_view_left() {
    let mut cam = PanCamera::default();
    // 400 px tall viewport over 4 world units: 0.01 units per px.
    cam.apply_drag(100.0, 0.0);
    let b = cam.view_bounds(square());
    assert!(approx_eq(b.left, -3.0));
    assert!(approx_eq(b.right, 1.0));
}

#[test]
fn drag_down_moves_view_up() {
    let mut cam = PanCamera::default();
    cam.apply_drag(0.0, 100.0);
    let b = cam.view_bounds(square());
    assert!(approx_eq(b.bottom, -1.0));
    assert!(approx_eq(b.top, 3.0));
}

// --- Aspect / degenerate viewports ---

#[test]
fn wide_viewport_widens_horizontal_extent() {
    let b = PanCamera::default().view_bounds(LogicalSize::new(800.0, 400.0));
    assert!(approx_eq(b.left, -4.0));
    assert!(approx_eq(b.right, 4.0));
    assert!(approx_eq(b.top, 2.0));
}

#[test]
fn degenerate_viewport_uses_square_aspect_and_ignores_pan() {
    let mut cam = PanCamera::default();
    cam.apply_drag(100.0, 100.0);
    let b = cam.view_bounds(LogicalSize::new(0.0, 0.0));
    assert_eq!(b, ViewBounds { left: -2.0, right: 2.0, bottom: -2.0, top: 2.0 });
    assert_eq!(cam.world_per_pixel(LogicalSize::default()), 0.0);
}

// --- Zoom ---

#[test]
fn zoom_by_scales_and_shrinks_view() {
    let mut cam = PanCamera::default();
    cam.zoom_by(2.0, 0.1, 10.0);
    assert_eq!(cam.zoom, 2.0);
    let b = cam.view_bounds(square());
    assert!(approx_eq(b.top, 1.0));
}

#[test]
fn zoom_by_clamps_to_limits() {
    let mut cam = PanCamera::default();
    cam.zoom_by(100.0, 0.1, 10.0);
    assert_eq!(cam.zoom, 10.0);
    cam.zoom_by(0.0001, 0.1, 10.0);
    assert_eq!(cam.zoom, 0.1);
}

#[test]
fn zoom_by_ignores_invalid_factors() {
    let mut cam = PanCamera::default();
    cam.zoom_by(0.0, 0.1, 10.0);
    cam.zoom_by(-2.0, 0.1, 10.0);
    cam.zoom_by(f64::NAN, 0.1, 10.0);
    cam.zoom_by(f64::INFINITY, 0.1, 10.0);
    assert_eq!(cam.zoom, 1.0);
}

#[test]
fn zoom_keeps_pan_in_screen_pixels() {
    let mut cam = PanCamera::default();
    cam.apply_drag(100.0, 0.0);
    cam.zoom_by(2.0, 0.1, 10.0);
    // 100 px at 0.005 units per px.
    let b = cam.view_bounds(square());
    assert!(approx_eq((b.left + b.right) / 2.0, -0.5));
}

// --- Projection ---

#[test]
fn projection_maps_bounds_to_clip_corners() {
    let mut cam = PanCamera::default();
    cam.apply_drag(40.0, -20.0);
    let b = cam.view_bounds(square());
    let m = cam.projection(square());

    #[allow(clippy::cast_possible_truncation)]
    let bottom_left = m * Vec4::new(b.left as f32, b.bottom as f32, 0.0, 1.0);
    #[allow(clippy::cast_possible_truncation)]
    let top_right = m * Vec4::new(b.right as f32, b.top as f32, 0.0, 1.0);

    assert!((bottom_left.x + 1.0).abs() < 1e-5);
    assert!((bottom_left.y + 1.0).abs() < 1e-5);
    assert!((top_right.x - 1.0).abs() < 1e-5);
    assert!((top_right.y - 1.0).abs() < 1e-5);
}

#[test]
fn default_projection_is_half_scale() {
    let m = PanCamera::default().projection(square());
    let cols = m.to_cols_array();
    assert!((cols[0] - 0.5).abs() < 1e-6);
    assert!((cols[5] - 0.5).abs() < 1e-6);
    assert!(cols[12].abs() < 1e-6);
    assert!(cols[13].abs() < 1e-6);
}
