use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

use crate::geometry::{BackingSize, LogicalSize};
use crate::sizer::{DrawingSurface, RenderViewport};

/// A canvas element sized against its parent container.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawingSurface for CanvasSurface {
    /// A detached canvas measures as zero-size.
    fn container_size(&self) -> LogicalSize {
        let Some(parent) = self.canvas.parent_element() else {
            log::warn!("viewport: canvas has no parent element; sizing to zero");
            return LogicalSize::default();
        };
        let rect = parent.get_bounding_client_rect();
        LogicalSize::new(rect.width(), rect.height())
    }

    fn backing_size(&self) -> BackingSize {
        BackingSize::new(self.canvas.width(), self.canvas.height())
    }

    fn set_backing_size(&mut self, size: BackingSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn set_display_size(&mut self, width: &str, height: &str) {
        let style = self.canvas.style();
        for (property, value) in [("width", width), ("height", height)] {
            if let Err(err) = style.set_property(property, value) {
                log::warn!("viewport: failed to set canvas style {property}={value}: {err:?}");
            }
        }
    }
}

impl RenderViewport for WebGl2RenderingContext {
    fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        self.viewport(x, y, width, height);
    }
}
