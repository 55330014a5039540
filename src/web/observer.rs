//! Layout-change subscriptions.
//!
//! [`observe_resize`] watches the canvas content box with a `ResizeObserver`
//! and reports each notification as an [`ObservedBox`], preferring the
//! device-pixel content box when the browser provides one.
//! [`observe_window_resize`] is the older approach: re-measure whenever the
//! window fires `resize`. Either subscription stops when dropped.

use js_sys::{Array, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    HtmlCanvasElement, ResizeObserver, ResizeObserverBoxOptions, ResizeObserverEntry, ResizeObserverOptions,
    ResizeObserverSize, Window,
};

use crate::error::ViewportError;
use crate::sizer::ObservedBox;

enum Subscription {
    Observer {
        observer: ResizeObserver,
        _callback: Closure<dyn FnMut(Array)>,
    },
    Window {
        window: Window,
        callback: Closure<dyn FnMut()>,
    },
}

/// A live layout-change subscription.
pub struct ResizeSubscription {
    inner: Option<Subscription>,
}

impl ResizeSubscription {
    /// Stop receiving notifications. Calling it again does nothing.
    pub fn disconnect(&mut self) {
        match self.inner.take() {
            Some(Subscription::Observer { observer, .. }) => observer.disconnect(),
            Some(Subscription::Window { window, callback }) => {
                if let Err(err) = window.remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
                {
                    log::warn!("viewport: failed to remove window resize listener: {err:?}");
                }
            }
            None => {}
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.inner.is_some()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Observe the canvas content box.
///
/// The browser delivers one notification right after observing starts, so
/// callers do not need to size the canvas up front.
///
/// # Errors
///
/// Fails when `ResizeObserver` is unavailable.
pub fn observe_resize<F>(canvas: &HtmlCanvasElement, mut on_resize: F) -> Result<ResizeSubscription, ViewportError>
where
    F: FnMut(ObservedBox) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array| {
        for entry in entries.iter() {
            let entry: ResizeObserverEntry = entry.unchecked_into();
            on_resize(observed_box(&entry));
        }
    }) as Box<dyn FnMut(Array)>);

    let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
    let options = ResizeObserverOptions::new();
    options.set_box(ResizeObserverBoxOptions::ContentBox);
    observer.observe_with_options(canvas, &options);

    Ok(ResizeSubscription { inner: Some(Subscription::Observer { observer, _callback: callback }) })
}

/// Call `on_resize` on every window `resize` event.
///
/// # Errors
///
/// Fails outside a window or when the listener cannot be added.
pub fn observe_window_resize<F>(on_resize: F) -> Result<ResizeSubscription, ViewportError>
where
    F: FnMut() + 'static,
{
    let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
    let callback = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
    Ok(ResizeSubscription { inner: Some(Subscription::Window { window, callback }) })
}

/// Read the most precise measurement an entry carries.
///
/// Order: `devicePixelContentBoxSize`, `contentBoxSize` (array or the older
/// single-object form), then `contentRect`.
#[must_use]
pub fn observed_box(entry: &ResizeObserverEntry) -> ObservedBox {
    if let Some(size) = first_box_size(entry, "devicePixelContentBoxSize") {
        return ObservedBox::DevicePixelContentBox { inline: size.inline_size(), block: size.block_size() };
    }
    if let Some(size) = first_box_size(entry, "contentBoxSize") {
        return ObservedBox::ContentBox { inline: size.inline_size(), block: size.block_size() };
    }
    let rect = entry.content_rect();
    ObservedBox::ContentRect { width: rect.width(), height: rect.height() }
}

/// Look the box-size property up reflectively: older browsers leave it undefined.
fn first_box_size(entry: &ResizeObserverEntry, property: &str) -> Option<ResizeObserverSize> {
    let value = match Reflect::get(entry, &JsValue::from_str(property)) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("viewport: failed to read {property}: {err:?}");
            return None;
        }
    };
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if !Array::is_array(&value) {
        return Some(value.unchecked_into());
    }
    let first = Array::from(&value).get(0);
    if first.is_undefined() {
        return None;
    }
    Some(first.unchecked_into())
}
