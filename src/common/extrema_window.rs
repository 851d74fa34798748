use alloc::collections::BinaryHeap;

use super::extremum::{Loudest, Quietest, Ranked};
use super::{window_width, Extremum};

/// The outcome of scanning a frame with an [ExtremaWindow].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExtremaReport {
    /// The largest difference between the tracked maximum and minimum
    /// seen at any scan position.
    pub max_gap: f32,
    /// The bin of the tracked maximum when `max_gap` was recorded.
    pub max_gap_bin: usize,
    /// The first occurrence of the largest intensity in the frame.
    pub global_max: Extremum,
}

impl Default for ExtremaReport {
    fn default() -> Self {
        ExtremaReport {
            max_gap: 0.0,
            max_gap_bin: 0,
            global_max: Extremum::new(0.0, 0),
        }
    }
}

/// Tracks the running maximum and minimum of the last `W` samples while
/// scanning a frame from low to high bins.
///
/// Eviction is approximate: when a sample leaves the window it is only
/// retired if it equals the current tracked maximum (or, failing that, the
/// current tracked minimum). A departing sample masked by a more extreme one
/// stays in its queue and may resurface later, so stale extrema can outlive
/// their window. Scores computed from this window depend on that behavior.
///
/// The queues are allocated once and reused for every frame. No state
/// carries over between calls to [feed](ExtremaWindow::feed).
pub struct ExtremaWindow {
    maxima: BinaryHeap<Loudest>,
    minima: BinaryHeap<Quietest>,
    seq: usize,
}

impl ExtremaWindow {
    /// Creates a window with queues sized for frames of `resolution` bins.
    pub fn new(resolution: usize) -> Self {
        ExtremaWindow {
            maxima: BinaryHeap::with_capacity(resolution),
            minima: BinaryHeap::with_capacity(resolution),
            seq: 0,
        }
    }

    /// Scans `frame` and returns the largest max-min gap together with the
    /// frame's global maximum. An empty frame yields [ExtremaReport::default].
    pub fn feed(&mut self, frame: &[f32]) -> ExtremaReport {
        self.maxima.clear();
        self.minima.clear();
        self.seq = 0;

        let first = match frame.first() {
            Some(first) => *first,
            None => return ExtremaReport::default(),
        };

        let width = window_width(frame.len());
        let seed_end = core::cmp::min(width, frame.len() - 1);

        // Seed the window with bins 0..=W
        let mut global_max = Extremum::new(first, 0);
        let mut seed_min = Extremum::new(first, 0);
        for (bin, value) in frame.iter().enumerate().take(seed_end + 1) {
            if *value > global_max.intensity {
                global_max = Extremum::new(*value, bin);
            } else if *value < seed_min.intensity {
                seed_min = Extremum::new(*value, bin);
            }
        }

        let mut report = ExtremaReport {
            max_gap: global_max.intensity - seed_min.intensity,
            max_gap_bin: global_max.bin,
            global_max,
        };
        let seq = self.next_seq();
        self.maxima.push(Loudest(Ranked {
            extremum: global_max,
            seq,
        }));
        let seq = self.next_seq();
        self.minima.push(Quietest(Ranked {
            extremum: seed_min,
            seq,
        }));

        for bin in (seed_end + 1)..frame.len() {
            let value = frame[bin];
            if value > global_max.intensity {
                global_max = Extremum::new(value, bin);
            }

            let departing = frame[bin - width];
            if self.tracked_max().map_or(false, |max| max.intensity == departing) {
                self.maxima.pop();
            } else if self.tracked_min().map_or(false, |min| min.intensity == departing) {
                self.minima.pop();
            }

            self.admit(Extremum::new(value, bin));

            if let (Some(max), Some(min)) = (self.tracked_max(), self.tracked_min()) {
                let gap = max.intensity - min.intensity;
                if gap > report.max_gap {
                    report.max_gap = gap;
                    report.max_gap_bin = max.bin;
                }
            }
        }

        report.global_max = global_max;
        report
    }

    fn admit(&mut self, extremum: Extremum) {
        let seq = self.next_seq();
        let ranked = Ranked { extremum, seq };
        self.maxima.push(Loudest(ranked));
        self.minima.push(Quietest(ranked));
    }

    fn tracked_max(&self) -> Option<Extremum> {
        self.maxima.peek().map(|top| top.0.extremum)
    }

    fn tracked_min(&self) -> Option<Extremum> {
        self.minima.peek().map(|top| top.0.extremum)
    }

    fn next_seq(&mut self) -> usize {
        let seq = self.seq;
        self.seq += 1;
        seq
    }
}
