//! Turning per-frame scores into discrete gesture events.
//!
//! Each recognizer owns an [EventStateMachine]. It is advanced once per
//! tick and reports when a gesture starts and when it ends. The
//! [GestureRecognizers](crate::gestures::GestureRecognizers) orchestrator
//! attaches gesture specific values to those transitions and hands them
//! out as [Event]s.

mod state_machine;

pub use state_machine::{EventStateMachine, RecognizerState, Transition};

/// A gesture event carrying a value for the event sink.
///
/// Clicks carry a button state, whistles a stick position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event<T> {
    /// The gesture started, or was re-emitted while still held.
    Onset(T),
    /// The gesture is still held, with an updated value.
    Tick(T),
    /// The gesture ended. The value is the gesture's rest value.
    Release(T),
}

impl<T> Event<T> {
    pub fn value(&self) -> &T {
        match self {
            Event::Onset(value) | Event::Tick(value) | Event::Release(value) => value,
        }
    }

    pub fn is_onset(&self) -> bool {
        matches!(self, Event::Onset(_))
    }

    pub fn is_release(&self) -> bool {
        matches!(self, Event::Release(_))
    }
}
