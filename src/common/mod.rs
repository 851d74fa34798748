//! Spectral feature extraction shared by the recognizers.

mod extrema_window;
mod extremum;
mod peak_separation;
mod spectrum_ext;

pub use extrema_window::{ExtremaReport, ExtremaWindow};
pub use extremum::Extremum;
pub use peak_separation::PeakSeparation;
pub use spectrum_ext::{window_width, SpectrumExt, NOISE_FLOOR, WINDOW_SCALE};

/// The per-frame features both scorers are built from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpectralFeatures {
    /// Number of local maxima in the frame.
    pub peak_count: usize,
    /// Output of the [ExtremaWindow] scan.
    pub extrema: ExtremaReport,
    /// Output of the [PeakSeparation] ranking.
    pub separation: f32,
}

/// Owns the reusable working buffers needed to extract [SpectralFeatures].
pub struct FeatureExtractor {
    window: ExtremaWindow,
    ranking: PeakSeparation,
}

impl FeatureExtractor {
    pub fn new(resolution: usize) -> Self {
        FeatureExtractor {
            window: ExtremaWindow::new(resolution),
            ranking: PeakSeparation::new(resolution),
        }
    }

    pub fn extract(&mut self, frame: &[f32]) -> SpectralFeatures {
        SpectralFeatures {
            peak_count: frame.local_maxima_count(),
            extrema: self.window.feed(frame),
            separation: self.ranking.rank(frame),
        }
    }
}
