use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

use crate::config::{ObserveMode, ViewportConfig};
use crate::controller::ViewportController;
use crate::error::ViewportError;
use crate::sizer::{ObservedBox, RenderViewport};
use crate::web::device_pixel_ratio;
use crate::web::observer::{ResizeSubscription, observe_resize, observe_window_resize};
use crate::web::surface::CanvasSurface;
use crate::web::track::{TrackingHandle, track};

/// A canvas viewport driven from JavaScript.
///
/// Keeps the canvas backing store sized to device pixels and pans the camera
/// on click-and-drag. The render loop reads `projection()` each frame and
/// checks `takeResized()` to recreate size-dependent GPU resources.
#[wasm_bindgen]
pub struct WebViewport {
    controller: Rc<RefCell<ViewportController>>,
    surface: CanvasSurface,
    gl: Option<WebGl2RenderingContext>,
    subscription: Option<ResizeSubscription>,
    tracking: Option<TrackingHandle>,
}

#[wasm_bindgen]
impl WebViewport {
    /// Attach to `canvas`. `gl`, when given, has its viewport kept in sync.
    /// `config_json` is a JSON `ViewportConfig`; absent means defaults.
    ///
    /// # Errors
    ///
    /// Fails on invalid config or when listeners cannot be attached.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        gl: Option<WebGl2RenderingContext>,
        config_json: Option<String>,
    ) -> Result<WebViewport, JsValue> {
        let config = match config_json.as_deref() {
            Some(raw) => ViewportConfig::from_json(raw)?,
            None => ViewportConfig::default(),
        };
        Ok(Self::attach(canvas, gl, config)?)
    }

    /// Re-measure the parent container now.
    #[wasm_bindgen(js_name = resizeNow)]
    pub fn resize_now(&mut self) {
        let viewport = self.gl.as_mut().map(|gl| gl as &mut dyn RenderViewport);
        self.controller
            .borrow_mut()
            .resize(&mut self.surface, viewport, device_pixel_ratio());
    }

    /// Projection matrix, 16 column-major floats.
    pub fn projection(&self) -> Vec<f32> {
        self.controller.borrow().projection_array().to_vec()
    }

    #[wasm_bindgen(getter, js_name = backingWidth)]
    pub fn backing_width(&self) -> u32 {
        self.controller.borrow().backing().width
    }

    #[wasm_bindgen(getter, js_name = backingHeight)]
    pub fn backing_height(&self) -> u32 {
        self.controller.borrow().backing().height
    }

    #[wasm_bindgen(getter, js_name = panX)]
    pub fn pan_x(&self) -> f64 {
        self.controller.borrow().camera.pan_x
    }

    #[wasm_bindgen(getter, js_name = panY)]
    pub fn pan_y(&self) -> f64 {
        self.controller.borrow().camera.pan_y
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.controller.borrow().camera.zoom
    }

    #[wasm_bindgen(js_name = zoomBy)]
    pub fn zoom_by(&self, factor: f64) {
        self.controller.borrow_mut().zoom_by(factor);
    }

    /// True once after each backing-size change.
    #[wasm_bindgen(js_name = takeResized)]
    pub fn take_resized(&self) -> bool {
        self.controller.borrow_mut().take_resized()
    }

    /// Stop starting new drags. A drag in progress finishes normally.
    #[wasm_bindgen(js_name = stopTracking)]
    pub fn stop_tracking(&mut self) {
        if let Some(tracking) = self.tracking.as_mut() {
            tracking.stop_tracking();
        }
    }

    /// Remove every listener and observer.
    pub fn destroy(&mut self) {
        self.tracking = None;
        self.subscription = None;
    }
}

impl WebViewport {
    /// Wire a controller to `canvas` with an already-validated config.
    ///
    /// # Errors
    ///
    /// Fails when the resize subscription or drag listeners cannot be attached.
    pub fn attach(
        canvas: HtmlCanvasElement,
        gl: Option<WebGl2RenderingContext>,
        config: ViewportConfig,
    ) -> Result<Self, ViewportError> {
        let observe = config.observe;
        let controller = Rc::new(RefCell::new(ViewportController::new(config)));
        let surface = CanvasSurface::new(canvas.clone());

        let subscription = match observe {
            ObserveMode::WindowResize => {
                let mut surface = surface.clone();
                let mut gl = gl.clone();
                resize_surface(&controller, &mut surface, gl.as_mut());
                let controller = Rc::clone(&controller);
                observe_window_resize(move || resize_surface(&controller, &mut surface, gl.as_mut()))?
            }
            ObserveMode::ResizeObserver => {
                let mut surface = surface.clone();
                let mut gl = gl.clone();
                let controller = Rc::clone(&controller);
                observe_resize(&canvas, move |observation| {
                    observe_surface(&controller, &mut surface, gl.as_mut(), observation);
                })?
            }
        };

        let for_drag = Rc::clone(&controller);
        let tracking = track(&canvas, move |dx, dy| for_drag.borrow_mut().apply_drag(dx, dy))?;

        log::info!("viewport: attached ({observe:?})");
        Ok(Self { controller, surface, gl, subscription: Some(subscription), tracking: Some(tracking) })
    }
}

fn resize_surface(
    controller: &RefCell<ViewportController>,
    surface: &mut CanvasSurface,
    gl: Option<&mut WebGl2RenderingContext>,
) {
    let viewport = gl.map(|gl| gl as &mut dyn RenderViewport);
    controller.borrow_mut().resize(surface, viewport, device_pixel_ratio());
}

fn observe_surface(
    controller: &RefCell<ViewportController>,
    surface: &mut CanvasSurface,
    gl: Option<&mut WebGl2RenderingContext>,
    observation: ObservedBox,
) {
    let viewport = gl.map(|gl| gl as &mut dyn RenderViewport);
    controller.borrow_mut().observe(surface, viewport, observation, device_pixel_ratio());
}
