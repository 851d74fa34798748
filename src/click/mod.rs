//! Recognition of short percussive transients such as finger snaps,
//! tongue clicks and claps.
//!
//! A click frame has lots of small spectral peaks, a moderate contrast
//! between the loudest and quietest bins inside the extrema window, and
//! no single peak towering over the others. The score is the sum of three
//! factors, each worth about a third:
//!
//! * peak density, saturating at one peak every seven bins,
//! * extrema window contrast, full weight for gaps in [0.1, 0.4),
//! * peak separation, full weight below 0.25 and decaying above.
//!
//! ```
//! use micro_gesture::click::ClickScorer;
//! use micro_gesture::Recognizer;
//!
//! // Alternating bins give one peak every other bin and a 0.2 contrast.
//! let frame: Vec<f32> = (0..256).map(|i| if i % 2 == 1 { 0.3 } else { 0.1 }).collect();
//! let mut scorer = ClickScorer::new(frame.len());
//! let recognition = scorer.recognize(&frame);
//! assert!(recognition.score > 0.9);
//! ```

mod scorer;

pub use scorer::{contrast_factor, peak_density_factor, separation_factor, ClickScorer};
