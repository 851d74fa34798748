//! Tunable parameters of the recognizers.
//!
//! The defaults reproduce the tuning the recognizers were developed with.
//! With the `serde` feature enabled, both structs can be loaded from any
//! serde format. Missing top level fields fall back to [GestureConfig::default].

use crate::error::Error;
use crate::recognizer::GestureKind;
use crate::whistle::FrequencyBand;

/// Number of consecutive non-detecting ticks after which a held gesture
/// is released.
pub const DEFAULT_SILENCE_TIMEOUT_TICKS: u32 = 25;

/// The frame resolution used when none is given.
pub const DEFAULT_RESOLUTION: usize = 1024;

/// Parameters of one recognizer's event state machine.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecognizerConfig {
    /// A frame is a detection when its score is strictly above this value.
    pub threshold: f32,
    /// Maximum distance, as a fraction of the resolution, between the
    /// dominant bin and the locked bin for a frame to count as the same
    /// gesture. The comparison is strict.
    pub lock_tolerance: f32,
    /// Number of sounding ticks after which a held gesture may emit a new onset.
    pub min_event_ticks: u32,
    /// Number of non-detecting ticks after which a held gesture is released.
    pub silence_timeout_ticks: u32,
}

impl RecognizerConfig {
    /// Clicks lock to any bin and are debounced for 200 ticks.
    pub fn click() -> Self {
        RecognizerConfig {
            threshold: 0.87,
            lock_tolerance: 1.0,
            min_event_ticks: 200,
            silence_timeout_ticks: DEFAULT_SILENCE_TIMEOUT_TICKS,
        }
    }

    /// Whistles lock within 5% of the resolution and re-emit every 10 ticks.
    pub fn whistle() -> Self {
        RecognizerConfig {
            threshold: 0.8,
            lock_tolerance: 0.05,
            min_event_ticks: 10,
            silence_timeout_ticks: DEFAULT_SILENCE_TIMEOUT_TICKS,
        }
    }

    /// Returns the default parameters for `kind`.
    pub fn for_kind(kind: GestureKind) -> Self {
        match kind {
            GestureKind::Click => RecognizerConfig::click(),
            GestureKind::Whistle => RecognizerConfig::whistle(),
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_lock_tolerance(mut self, lock_tolerance: f32) -> Self {
        self.lock_tolerance = lock_tolerance;
        self
    }

    pub fn with_min_event_ticks(mut self, min_event_ticks: u32) -> Self {
        self.min_event_ticks = min_event_ticks;
        self
    }

    pub fn with_silence_timeout_ticks(mut self, silence_timeout_ticks: u32) -> Self {
        self.silence_timeout_ticks = silence_timeout_ticks;
        self
    }

    /// The lock tolerance in bins for frames of `resolution` bins.
    pub fn lock_tolerance_bins(&self, resolution: usize) -> f32 {
        self.lock_tolerance * (resolution as f32)
    }

    pub fn validate(&self, kind: GestureKind) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidThreshold {
                kind,
                threshold: self.threshold,
            });
        }
        if !self.lock_tolerance.is_finite() || self.lock_tolerance <= 0.0 {
            return Err(Error::InvalidLockTolerance {
                kind,
                tolerance: self.lock_tolerance,
            });
        }
        if self.min_event_ticks == 0 || self.silence_timeout_ticks == 0 {
            return Err(Error::ZeroDuration { kind });
        }
        Ok(())
    }
}

/// Parameters of a full set of recognizers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// The fixed number of bins in every spectrum frame.
    pub resolution: usize,
    pub click: RecognizerConfig,
    pub whistle: RecognizerConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        GestureConfig::new(DEFAULT_RESOLUTION)
    }
}

impl GestureConfig {
    /// Default recognizer parameters for frames of `resolution` bins.
    pub fn new(resolution: usize) -> Self {
        GestureConfig {
            resolution,
            click: RecognizerConfig::click(),
            whistle: RecognizerConfig::whistle(),
        }
    }

    pub fn with_click(mut self, click: RecognizerConfig) -> Self {
        self.click = click;
        self
    }

    pub fn with_whistle(mut self, whistle: RecognizerConfig) -> Self {
        self.whistle = whistle;
        self
    }

    /// Returns the parameters used for `kind`.
    pub fn recognizer(&self, kind: GestureKind) -> &RecognizerConfig {
        match kind {
            GestureKind::Click => &self.click,
            GestureKind::Whistle => &self.whistle,
        }
    }

    /// Checks that the resolution has a whistle frequency band and that
    /// both recognizers have usable parameters.
    pub fn validate(&self) -> Result<(), Error> {
        if FrequencyBand::for_resolution(self.resolution).is_none() {
            return Err(Error::UnsupportedResolution(self.resolution));
        }
        self.click.validate(GestureKind::Click)?;
        self.whistle.validate(GestureKind::Whistle)
    }
}
