//! Drag tracking: pointer-down, pointer-move*, pointer-up turned into
//! incremental displacement deltas.
//!
//! [`DragSession`] is the bare state machine. It knows nothing about listeners
//! or callbacks and reports what each event did, so a host binding can attach
//! document listeners on [`DragTransition::Started`] and detach them on
//! [`DragTransition::Ended`]. [`DragTracker`] pairs a session with a callback
//! and the stop-tracking gate; the browser binding drives one per tracked
//! element.
//!
//! Deltas are always relative to the previous pointer position, never to the
//! drag origin, so the sum of deltas over a session equals the total
//! displacement no matter how many moves the host coalesced.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::geometry::Point;

/// Drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Pointer position at the previous event, used to compute the next delta.
        last: Point,
    },
}

/// What a pointer event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTransition {
    /// `Idle -> Dragging`: a new session began.
    Started,
    /// Pointer-down while already dragging: the session was re-based onto the
    /// new position; no second session exists.
    Rebased,
    /// `Dragging -> Idle`: the session ended.
    Ended,
    /// The event had no effect in the current state.
    Ignored,
}

/// The drag state machine.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer-down over the tracked element.
    pub fn pointer_down(&mut self, at: Point) -> DragTransition {
        let transition = match self.state {
            DragState::Idle => DragTransition::Started,
            DragState::Dragging { .. } => DragTransition::Rebased,
        };
        self.state = DragState::Dragging { last: at };
        transition
    }

    /// Pointer-move anywhere. Returns the delta since the previous event while
    /// dragging, `None` otherwise.
    pub fn pointer_move(&mut self, at: Point) -> Option<(f64, f64)> {
        let DragState::Dragging { last } = self.state else {
            return None;
        };
        self.state = DragState::Dragging { last: at };
        Some(at.delta_from(last))
    }

    /// Pointer-up anywhere in the document.
    pub fn pointer_up(&mut self) -> DragTransition {
        match self.state {
            DragState::Idle => DragTransition::Ignored,
            DragState::Dragging { .. } => {
                self.state = DragState::Idle;
                DragTransition::Ended
            }
        }
    }
}

/// A drag session wired to a delta callback.
///
/// Implements the `track(element, callback)` contract for whoever delivers
/// the pointer events. After [`DragTracker::stop_tracking`] new
/// sessions are refused; a session already in flight still runs to its
/// pointer-up.
pub struct DragTracker<F>
where
    F: FnMut(f64, f64),
{
    session: DragSession,
    callback: F,
    tracking: bool,
}

impl<F> DragTracker<F>
where
    F: FnMut(f64, f64),
{
    /// Start tracking with `callback(dx, dy)` invoked once per move while dragging.
    pub fn track(callback: F) -> Self {
        Self { session: DragSession::new(), callback, tracking: true }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Stop accepting pointer-down. Calling it again does nothing.
    pub fn stop_tracking(&mut self) {
        self.tracking = false;
    }

    pub fn pointer_down(&mut self, at: Point) -> DragTransition {
        if !self.tracking {
            return DragTransition::Ignored;
        }
        self.session.pointer_down(at)
    }

    pub fn pointer_move(&mut self, at: Point) {
        if let Some((dx, dy)) = self.session.pointer_move(at) {
            (self.callback)(dx, dy);
        }
    }

    pub fn pointer_up(&mut self) -> DragTransition {
        self.session.pointer_up()
    }

    /// Stop tracking and end any session in flight without a pointer-up.
    /// Returns [`DragTransition::Ended`] when a session was cut short.
    pub fn cancel(&mut self) -> DragTransition {
        self.stop_tracking();
        self.session.pointer_up()
    }
}
