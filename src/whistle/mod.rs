//! Recognition of sustained tonal sounds such as whistles, and mapping of
//! the whistled pitch to a 2D stick position.
//!
//! A whistle frame has few spectral peaks, one of which stands well above
//! the rest and sits in the middle of the spectrum. The score is the sum
//! of four factors, each worth about a quarter:
//!
//! * peak sparsity, zero at one peak every six bins,
//! * extrema window contrast, capped at 0.8,
//! * position of the dominant bin, full credit between 20% and 60% of the frame,
//! * peak separation, capped at 0.6.
//!
//! While a whistle is held, the [AxisMapper] turns the locked bin into a
//! stick position. Higher pitches push the stick right, lower pitches left.
//!
//! ```
//! use micro_gesture::whistle::{AxisMapper, WhistleScorer};
//! use micro_gesture::Recognizer;
//!
//! let mut frame = vec![0.0; 256];
//! frame[110] = 0.9;
//! let mut scorer = WhistleScorer::new(frame.len());
//! let recognition = scorer.recognize(&frame);
//! assert!(recognition.score > 0.9);
//!
//! let mapper = AxisMapper::for_resolution(frame.len()).unwrap();
//! let [x, y] = mapper.map(recognition.dominant_bin);
//! assert_eq!(x, 0.0);
//! assert_eq!(y, 1.0);
//! ```

mod axis;
mod scorer;

pub use axis::{arc_height, AxisMapper, FrequencyBand};
pub use scorer::{
    contrast_factor, position_factor, separation_factor, sparsity_factor, WhistleScorer,
};
