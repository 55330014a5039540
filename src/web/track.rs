//! DOM mouse listeners driving a [`DragTracker`].
//!
//! `mousedown` is watched on the tracked element for as long as the handle
//! tracks. Each drag session adds one `mousemove` listener and one one-shot
//! `mouseup` listener to the document, so a drag keeps going when the pointer
//! leaves the element and still ends on release outside it. The move listener
//! is removed on `mouseup`; the up listener removes itself.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, MouseEvent};

use crate::drag::{DragTracker, DragTransition};
use crate::error::ViewportError;
use crate::geometry::Point;

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;
type DeltaCallback = Box<dyn FnMut(f64, f64)>;

#[derive(Default)]
struct SessionListeners {
    on_move: Option<MouseClosure>,
    on_up: Option<MouseClosure>,
}

struct Tracking {
    document: Document,
    tracker: RefCell<DragTracker<DeltaCallback>>,
    listeners: RefCell<SessionListeners>,
}

impl Tracking {
    fn pointer_down(this: &Rc<Self>, at: Point) {
        let transition = this.tracker.borrow_mut().pointer_down(at);
        if transition == DragTransition::Started {
            log::debug!("drag: session started at ({}, {})", at.x, at.y);
            Self::attach_session_listeners(this);
        }
    }

    fn pointer_move(&self, at: Point) {
        self.tracker.borrow_mut().pointer_move(at);
    }

    fn pointer_up(&self) {
        if self.tracker.borrow_mut().pointer_up() == DragTransition::Ended {
            log::debug!("drag: session ended");
            self.detach_move();
        }
    }

    fn attach_session_listeners(this: &Rc<Self>) {
        let for_move = Rc::clone(this);
        let on_move = Closure::wrap(Box::new(move |ev: MouseEvent| {
            for_move.pointer_move(page_point(&ev));
        }) as Box<dyn FnMut(MouseEvent)>);

        let for_up = Rc::clone(this);
        let on_up = Closure::wrap(Box::new(move |_ev: MouseEvent| {
            for_up.pointer_up();
        }) as Box<dyn FnMut(MouseEvent)>);

        if let Err(err) = this
            .document
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        {
            log::warn!("drag: failed to add mousemove listener: {err:?}");
        }
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(err) = this.document.add_event_listener_with_callback_and_add_event_listener_options(
            "mouseup",
            on_up.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("drag: failed to add mouseup listener: {err:?}");
        }

        // The previous session's up listener already fired and removed itself.
        let mut listeners = this.listeners.borrow_mut();
        listeners.on_move = Some(on_move);
        listeners.on_up = Some(on_up);
    }

    fn detach_move(&self) {
        let Some(on_move) = self.listeners.borrow_mut().on_move.take() else {
            return;
        };
        if let Err(err) = self
            .document
            .remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        {
            log::warn!("drag: failed to remove mousemove listener: {err:?}");
        }
    }

    /// Remove every session listener, ending any drag in flight.
    fn detach_all(&self) {
        self.detach_move();
        let on_up = self.listeners.borrow_mut().on_up.take();
        if let Some(on_up) = on_up {
            if let Err(err) = self
                .document
                .remove_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())
            {
                log::warn!("drag: failed to remove mouseup listener: {err:?}");
            }
        }
        if self.tracker.borrow_mut().cancel() == DragTransition::Ended {
            log::debug!("drag: session cut short by teardown");
        }
    }
}

/// Handle returned by [`track`].
///
/// Dropping it removes every listener it registered.
pub struct TrackingHandle {
    element: Element,
    on_down: Option<MouseClosure>,
    tracking: Rc<Tracking>,
}

impl TrackingHandle {
    /// Stop starting new drags on the element. Calling it again does nothing.
    ///
    /// A drag already in progress still ends normally on `mouseup`.
    pub fn stop_tracking(&mut self) {
        self.tracking.tracker.borrow_mut().stop_tracking();
        let Some(on_down) = self.on_down.take() else {
            return;
        };
        if let Err(err) = self
            .element
            .remove_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())
        {
            log::warn!("drag: failed to remove mousedown listener: {err:?}");
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking.tracker.borrow().is_tracking()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracking.tracker.borrow().is_dragging()
    }
}

impl Drop for TrackingHandle {
    fn drop(&mut self) {
        self.stop_tracking();
        self.tracking.detach_all();
    }
}

/// Report `callback(dx, dy)` for every mouse move while dragging on `element`.
///
/// # Errors
///
/// Fails outside a document or when the `mousedown` listener cannot be added.
pub fn track<F>(element: &Element, callback: F) -> Result<TrackingHandle, ViewportError>
where
    F: FnMut(f64, f64) + 'static,
{
    let document = web_sys::window()
        .ok_or(ViewportError::NoWindow)?
        .document()
        .ok_or(ViewportError::NoDocument)?;
    let tracking = Rc::new(Tracking {
        document,
        tracker: RefCell::new(DragTracker::track(Box::new(callback) as DeltaCallback)),
        listeners: RefCell::new(SessionListeners::default()),
    });

    let for_down = Rc::clone(&tracking);
    let on_down = Closure::wrap(Box::new(move |ev: MouseEvent| {
        Tracking::pointer_down(&for_down, page_point(&ev));
    }) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;

    Ok(TrackingHandle { element: element.clone(), on_down: Some(on_down), tracking })
}

fn page_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.page_x()), f64::from(ev.page_y()))
}
