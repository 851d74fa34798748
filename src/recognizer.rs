use core::fmt;

/// The gestures this crate knows how to recognize.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureKind {
    /// A short percussive transient, e.g a finger snap or a clap.
    Click,
    /// A sustained tonal sound, e.g a whistle or a recorder note.
    Whistle,
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureKind::Click => write!(f, "click"),
            GestureKind::Whistle => write!(f, "whistle"),
        }
    }
}

/// The result of scoring a single spectrum frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Recognition {
    /// How well the frame matches the gesture, in [0, 1].
    pub score: f32,
    /// The bin of the frame's global maximum.
    pub dominant_bin: usize,
}

impl Recognition {
    /// A non-match, used for frames that carry no information.
    pub fn silent() -> Self {
        Recognition {
            score: 0.0,
            dominant_bin: 0,
        }
    }

    pub(crate) fn clamped(score: f32, dominant_bin: usize) -> Self {
        // NaN compares false against everything, so map it to a non-match.
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 1.0)
        };
        Recognition {
            score,
            dominant_bin,
        }
    }
}

/// Scores spectrum frames for one kind of gesture.
///
/// Implementations are pure functions of the frame, apart from reusable
/// working buffers. Timing and debouncing live in
/// [EventStateMachine](crate::event::EventStateMachine).
pub trait Recognizer {
    /// The gesture scored by this recognizer.
    fn kind(&self) -> GestureKind;
    /// Scores `frame`. The returned score is always in [0, 1].
    fn recognize(&mut self, frame: &[f32]) -> Recognition;
}
