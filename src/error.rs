use crate::recognizer::GestureKind;

/// Errors reported when building recognizers from a configuration.
///
/// Per-frame processing never fails. Degenerate frames simply score 0.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unsupported resolution {0}, expected 256, 512 or 1024 bins")]
    UnsupportedResolution(usize),
    #[error("{kind} threshold {threshold} is outside [0, 1]")]
    InvalidThreshold { kind: GestureKind, threshold: f32 },
    #[error("{kind} lock tolerance {tolerance} must be finite and positive")]
    InvalidLockTolerance { kind: GestureKind, tolerance: f32 },
    #[error("{kind} event duration and silence timeout must be at least one tick")]
    ZeroDuration { kind: GestureKind },
}
