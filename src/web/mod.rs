//! Browser bindings.
//!
//! Everything in this module talks to the DOM through `web-sys` and only
//! works inside a browser. It compiles on every target so the crate builds
//! natively, but the core logic it wraps ([`crate::sizer`], [`crate::drag`],
//! [`crate::controller`]) is what the unit tests exercise.
//!
//! | Module | Role |
//! |--------|------|
//! | [`surface`] | `HtmlCanvasElement` / `WebGl2RenderingContext` as surface and viewport |
//! | [`observer`] | `ResizeObserver` and window `resize` subscriptions |
//! | [`track`] | DOM mouse listeners driving a drag session |
//! | [`bindings`] | `#[wasm_bindgen]` surface for JavaScript render loops |

pub mod bindings;
pub mod observer;
pub mod surface;
pub mod track;

pub use bindings::WebViewport;
pub use observer::{ResizeSubscription, observe_resize, observe_window_resize, observed_box};
pub use surface::CanvasSurface;
pub use track::{TrackingHandle, track};

use wasm_bindgen::prelude::*;

use crate::error::ViewportError;

/// Route `log` records and panics to the browser console.
///
/// `level` is a `log` level name (`"debug"`, `"info"`, ...); absent means info.
///
/// # Errors
///
/// Fails when the level name is unknown or a logger is already installed.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = match level.as_deref() {
        Some(name) => name
            .parse::<log::Level>()
            .map_err(|err| ViewportError::Logging(err.to_string()))?,
        None => log::Level::Info,
    };
    console_log::init_with_level(level).map_err(|err| ViewportError::Logging(err.to_string()))?;
    Ok(())
}

/// The current device pixel ratio, or 1.0 outside a window.
#[must_use]
pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |window| window.device_pixel_ratio())
}
