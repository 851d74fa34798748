use crate::common::FeatureExtractor;
use crate::recognizer::{GestureKind, Recognition, Recognizer};

/// The maximum contribution of each factor.
const FACTOR_WEIGHT: f32 = 0.25;
/// One peak every `PEAK_SPACING` bins zeroes the sparsity factor.
const PEAK_SPACING: usize = 6;
const CONTRAST_CAP: f32 = 0.8;
const SEPARATION_CAP: f32 = 0.6;
/// Relative positions of the band where whistles usually sit.
const BAND_LOW: f32 = 0.2;
const BAND_HIGH: f32 = 0.6;

/// Scores frames for the [whistle](GestureKind::Whistle) gesture.
pub struct WhistleScorer {
    features: FeatureExtractor,
}

impl WhistleScorer {
    pub fn new(resolution: usize) -> Self {
        WhistleScorer {
            features: FeatureExtractor::new(resolution),
        }
    }
}

impl Recognizer for WhistleScorer {
    fn kind(&self) -> GestureKind {
        GestureKind::Whistle
    }

    fn recognize(&mut self, frame: &[f32]) -> Recognition {
        if frame.is_empty() {
            return Recognition::silent();
        }
        let features = self.features.extract(frame);
        let dominant_bin = features.extrema.global_max.bin;
        let f1 = sparsity_factor(features.peak_count, frame.len());
        let f2 = contrast_factor(features.extrema.max_gap);
        let f3 = position_factor(dominant_bin, frame.len());
        let f4 = separation_factor(features.separation);
        log::trace!("whistle factors {} {} {} {}", f1, f2, f3, f4);
        Recognition::clamped(f1 + f2 + f3 + f4, dominant_bin)
    }
}

/// Tonal sounds are spectrally sparse: the fewer peaks the better, down
/// to nothing at one peak every six bins. Denser frames get a negative
/// factor that pulls the whole score down. A frame without peaks scores 0.
pub fn sparsity_factor(peak_count: usize, resolution: usize) -> f32 {
    let saturation = resolution / PEAK_SPACING;
    if peak_count == 0 || saturation == 0 {
        return 0.0;
    }
    (1.0 - (peak_count as f32) / (saturation as f32)) * FACTOR_WEIGHT
}

/// The stronger the dominant peak stands out, the better.
pub fn contrast_factor(max_gap: f32) -> f32 {
    f32::max(0.0, f32::min(max_gap, CONTRAST_CAP)) / CONTRAST_CAP * FACTOR_WEIGHT
}

/// Full credit for a dominant bin between 20% and 60% of the frame, with
/// linearly decaying partial credit outside that band. Bin 0 scores nothing.
pub fn position_factor(bin: usize, resolution: usize) -> f32 {
    if bin == 0 || resolution == 0 {
        return 0.0;
    }
    let n = resolution as f32;
    let bin = bin as f32;
    if bin < BAND_LOW * n {
        (bin / n) * 0.5 * FACTOR_WEIGHT
    } else if bin > BAND_HIGH * n {
        f32::max(0.0, 1.0 - (bin - BAND_HIGH * n) / n) * 0.5 * FACTOR_WEIGHT
    } else {
        FACTOR_WEIGHT
    }
}

/// The further the loudest peak stands above the next separated peak,
/// the better.
pub fn separation_factor(separation: f32) -> f32 {
    f32::max(0.0, f32::min(separation, SEPARATION_CAP)) / SEPARATION_CAP * FACTOR_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SpectrumExt;
    use alloc::vec::Vec;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn tone(n: usize, bin: usize) -> Vec<f32> {
        let mut frame = alloc::vec![0.0; n];
        frame[bin] = 0.9;
        frame[bin - 1] = 0.5;
        frame[bin + 1] = 0.5;
        frame
    }

    #[test]
    fn test_empty_frame() {
        let mut scorer = WhistleScorer::new(0);
        assert_eq!(scorer.recognize(&[]), Recognition::silent());
    }

    #[test]
    fn test_flat_frame_scores_low() {
        let frame = [0.4_f32; 256];
        let mut scorer = WhistleScorer::new(frame.len());
        let recognition = scorer.recognize(&frame);
        // No peaks, no contrast and a dominant bin at 0.
        assert_eq!(sparsity_factor(frame.local_maxima_count(), frame.len()), 0.0);
        assert!(recognition.score < 0.2);
    }

    #[test]
    fn test_centered_tone_scores_high() {
        for n in [256_usize, 512, 1024].iter() {
            let bin = n * 2 / 5;
            let frame = tone(*n, bin);
            let mut scorer = WhistleScorer::new(*n);
            let recognition = scorer.recognize(&frame);
            assert!(recognition.score > 0.95, "score {} for N = {}", recognition.score, n);
            assert_eq!(recognition.dominant_bin, bin);
        }
    }

    #[test]
    fn test_edge_spike_is_penalized() {
        let mut centered = [0.0_f32; 256];
        centered[100] = 1.0;
        let mut edge = [0.0_f32; 256];
        edge[1] = 1.0;

        let mut scorer = WhistleScorer::new(256);
        let centered_score = scorer.recognize(&centered).score;
        let edge_score = scorer.recognize(&edge).score;
        assert!(edge_score < centered_score);
        assert!(edge_score < 0.8);
    }

    #[test]
    fn test_dense_peaks_score_low() {
        let frame: Vec<f32> = (0..256).map(|i| if i % 2 == 1 { 0.3 } else { 0.1 }).collect();
        let mut scorer = WhistleScorer::new(frame.len());
        assert!(scorer.recognize(&frame).score < 0.3);
    }

    #[test]
    fn test_position_factor() {
        assert_eq!(position_factor(0, 256), 0.0);
        assert_eq!(position_factor(10, 0), 0.0);
        assert_eq!(position_factor(52, 256), FACTOR_WEIGHT);
        assert_eq!(position_factor(153, 256), FACTOR_WEIGHT);
        // Below the band credit grows with the bin.
        assert!(position_factor(10, 256) < position_factor(40, 256));
        assert!(position_factor(40, 256) < FACTOR_WEIGHT);
        // Above the band credit shrinks with the bin.
        assert!(position_factor(250, 256) < position_factor(170, 256));
        assert!(position_factor(170, 256) < FACTOR_WEIGHT);
    }

    #[test]
    fn test_capped_factors() {
        assert_eq!(contrast_factor(0.0), 0.0);
        assert_eq!(contrast_factor(0.8), FACTOR_WEIGHT);
        assert_eq!(contrast_factor(1.5), FACTOR_WEIGHT);
        assert_eq!(separation_factor(0.6), FACTOR_WEIGHT);
        assert_eq!(separation_factor(3.0), FACTOR_WEIGHT);
        assert!((separation_factor(0.3) - 0.5 * FACTOR_WEIGHT).abs() <= 1e-6);
        assert_eq!(sparsity_factor(0, 256), 0.0);
        assert_eq!(sparsity_factor(42, 256), 0.0);
        assert!(sparsity_factor(1, 256) > sparsity_factor(20, 256));
    }

    #[test]
    fn test_dense_frames_are_penalized() {
        // 128 peaks against a saturation of 42 gives (1 - 128 / 42) * 0.25.
        let factor = sparsity_factor(128, 256);
        assert!((factor - (1.0 - 128.0 / 42.0) * FACTOR_WEIGHT).abs() <= 1e-6);
        assert!(factor < -0.5);

        // Dense peaks under a strong centered one: the other three factors
        // alone would pass a 0.5 threshold, the penalty keeps it well below.
        let mut frame: Vec<f32> = (0..256).map(|i| if i % 2 == 1 { 0.12 } else { 0.1 }).collect();
        frame[101] = 0.9;
        let mut scorer = WhistleScorer::new(frame.len());
        let recognition = scorer.recognize(&frame);
        assert_eq!(recognition.dominant_bin, 101);
        assert!(recognition.score < 0.4, "score {}", recognition.score);
    }

    #[test]
    fn test_score_range_on_random_frames() {
        let mut rng = StdRng::seed_from_u64(456);
        for n in [0_usize, 1, 5, 31, 256, 512, 1024].iter() {
            let mut scorer = WhistleScorer::new(*n);
            for _ in 0..20 {
                let frame: Vec<f32> = (0..*n).map(|_| rng.gen_range(0.0..=1.2)).collect();
                let recognition = scorer.recognize(&frame);
                assert!(recognition.score >= 0.0 && recognition.score <= 1.0);
                assert!(*n == 0 || recognition.dominant_bin < *n);
            }
        }
    }
}
