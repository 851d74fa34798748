//! `[f32]` spectrum frame extensions.

use micromath::F32Ext;

use super::Extremum;

/// Intensity a sample must exceed to count as a peak when it has no predecessor.
pub const NOISE_FLOOR: f32 = 0.01;

/// Fraction of the frame length covered by the extrema window.
pub const WINDOW_SCALE: f32 = 0.1;

/// Returns the extrema window width `W = round(0.1 * N)` for a frame of length `n`.
pub fn window_width(n: usize) -> usize {
    F32Ext::round(WINDOW_SCALE * (n as f32)) as usize
}

/// Spectrum frame extensions.
pub trait SpectrumExt {
    /// Returns the number of local maxima, i.e samples strictly greater
    /// than both their predecessor and their successor. The last sample
    /// never counts, and the first sample is compared against [NOISE_FLOOR].
    fn local_maxima_count(&self) -> usize;
    /// Returns the first occurrence of the largest intensity,
    /// or `None` for an empty frame.
    fn global_maximum(&self) -> Option<Extremum>;
}

impl SpectrumExt for [f32] {
    fn local_maxima_count(&self) -> usize {
        let mut count = 0;
        let mut last = NOISE_FLOOR;
        for (j, value) in self.iter().enumerate() {
            if let Some(next) = self.get(j + 1) {
                if *value > last && value > next {
                    count += 1;
                }
            }
            last = *value;
        }
        count
    }

    fn global_maximum(&self) -> Option<Extremum> {
        let first = *self.first()?;
        let mut max = Extremum::new(first, 0);
        for (bin, value) in self.iter().enumerate().skip(1) {
            if *value > max.intensity {
                max = Extremum::new(*value, bin);
            }
        }
        Some(max)
    }
}
