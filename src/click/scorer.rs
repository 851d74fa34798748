use crate::common::FeatureExtractor;
use crate::recognizer::{GestureKind, Recognition, Recognizer};

/// The maximum contribution of each factor.
const FACTOR_WEIGHT: f32 = 0.33;
/// One peak every `PEAK_SPACING` bins saturates the peak density factor.
const PEAK_SPACING: usize = 7;
const MIN_CONTRAST: f32 = 0.1;
const MAX_FULL_CONTRAST: f32 = 0.4;
const MAX_FULL_SEPARATION: f32 = 0.25;

/// Scores frames for the [click](GestureKind::Click) gesture.
pub struct ClickScorer {
    features: FeatureExtractor,
}

impl ClickScorer {
    pub fn new(resolution: usize) -> Self {
        ClickScorer {
            features: FeatureExtractor::new(resolution),
        }
    }
}

impl Recognizer for ClickScorer {
    fn kind(&self) -> GestureKind {
        GestureKind::Click
    }

    fn recognize(&mut self, frame: &[f32]) -> Recognition {
        if frame.is_empty() {
            return Recognition::silent();
        }
        let features = self.features.extract(frame);
        let f1 = peak_density_factor(features.peak_count, frame.len());
        let f2 = contrast_factor(features.extrema.max_gap);
        let f3 = separation_factor(features.separation);
        log::trace!("click factors {} {} {}", f1, f2, f3);
        Recognition::clamped(f1 + f2 + f3, features.extrema.global_max.bin)
    }
}

/// Many peaks means click. Saturates at `resolution / 7` peaks.
pub fn peak_density_factor(peak_count: usize, resolution: usize) -> f32 {
    let saturation = resolution / PEAK_SPACING;
    if peak_count == 0 || saturation == 0 {
        return 0.0;
    }
    let peak_count = core::cmp::min(peak_count, saturation);
    (peak_count as f32) / ((resolution as f32) / (PEAK_SPACING as f32)) * FACTOR_WEIGHT
}

/// Rewards a moderate max-min gap inside the extrema window. Near silent
/// frames get nothing and very strong peaks are penalized linearly.
pub fn contrast_factor(max_gap: f32) -> f32 {
    if max_gap < MIN_CONTRAST {
        0.0
    } else if max_gap < MAX_FULL_CONTRAST {
        FACTOR_WEIGHT
    } else {
        f32::max(0.0, 1.0 - (max_gap - MAX_FULL_CONTRAST)) * FACTOR_WEIGHT
    }
}

/// Rewards comparable, well separated peaks. A lone dominant peak scores low.
pub fn separation_factor(separation: f32) -> f32 {
    if separation == 0.0 {
        0.0
    } else if separation < MAX_FULL_SEPARATION {
        FACTOR_WEIGHT
    } else {
        f32::max(0.0, 1.0 - separation) * FACTOR_WEIGHT
    }
}
