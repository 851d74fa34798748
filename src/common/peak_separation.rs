use alloc::collections::BinaryHeap;

use super::extremum::{Loudest, Ranked};
use super::{window_width, Extremum};

/// Ranks the bins of a frame by intensity and measures how far apart, in
/// intensity, the dominant peaks are once neighboring bins are discarded.
///
/// Starting from the loudest bin, every ranked bin closer than `2 * W` bins
/// to the current top is dropped, and the intensity gap between the current
/// top and the next surviving bin is recorded. The result is the largest such
/// gap over all bins with positive intensity. If no gap is ever recorded, the
/// result is the intensity of the last peak popped, i.e a lone peak scores its
/// own height.
///
/// Isolated transients give large values, clusters of comparable resonant
/// peaks give small ones.
pub struct PeakSeparation {
    ranked: BinaryHeap<Loudest>,
}

impl PeakSeparation {
    pub fn new(resolution: usize) -> Self {
        PeakSeparation {
            ranked: BinaryHeap::with_capacity(resolution),
        }
    }

    /// Returns the largest intensity gap between separated peaks of `frame`,
    /// or 0 for an empty frame.
    pub fn rank(&mut self, frame: &[f32]) -> f32 {
        self.ranked.clear();
        for (bin, value) in frame.iter().enumerate() {
            self.ranked.push(Loudest(Ranked {
                extremum: Extremum::new(*value, bin),
                seq: bin,
            }));
        }

        let min_distance = 2 * window_width(frame.len());
        let mut top = match self.ranked.pop() {
            Some(top) => top.0.extremum,
            None => return 0.0,
        };

        let mut gap: f32 = 0.0;
        while self.next_is_audible() {
            while let Some(next) = self.ranked.peek() {
                if top.bin.abs_diff(next.0.extremum.bin) < min_distance {
                    self.ranked.pop();
                } else {
                    break;
                }
            }

            if let Some(next) = self.ranked.pop() {
                let next = next.0.extremum;
                gap = gap.max(top.intensity - next.intensity);
                top = next;
            }
        }

        if gap == 0.0 {
            top.intensity
        } else {
            gap
        }
    }

    fn next_is_audible(&self) -> bool {
        self.ranked
            .peek()
            .map_or(false, |next| next.0.extremum.intensity > 0.0)
    }
}
