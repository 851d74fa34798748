//! Recognition of vocal and percussive gestures, like finger clicks and
//! whistles, in a stream of log-frequency magnitude spectra.
//!
//! Every tick, a spectrum frame of fixed resolution (256, 512 or 1024 bins)
//! is scored by one recognizer per gesture. A per-recognizer state machine
//! debounces the scores into discrete events, which an event sink can turn
//! into input device state:
//!
//! * clicks behave like a button, [Event::Onset] carries `true` and
//! [Event::Release] carries `false`,
//! * whistles behave like a stick, with the whistled pitch mapped to an
//! `[x, y]` position by the [AxisMapper](whistle::AxisMapper).
//!
//! Features
//! * `no_std` compatible, all working buffers are allocated up front.
//! * Deterministic, replaying the same frames gives the same events.
//! * Optional `serde` support for configuration and events.
//!
//! # Examples
//!
//! ```
//! use micro_gesture::{Event, GestureConfig, GestureRecognizers};
//!
//! let mut recognizers = GestureRecognizers::new(GestureConfig::new(256)).unwrap();
//!
//! // A single tonal peak in the middle of the spectrum.
//! let mut frame = vec![0.0; 256];
//! frame[110] = 0.9;
//!
//! let output = recognizers.process(&frame, 1.0 / 60.0);
//! assert_eq!(output.whistle.event, Some(Event::Onset([0.0, 1.0])));
//! assert_eq!(output.click.event, None);
//! ```
//!
//! The scorers can also be used on their own, see the [click] and
//! [whistle] modules.

#![no_std]

extern crate alloc;

pub mod click;
pub mod common;
pub mod config;
pub mod error;
pub mod event;
pub mod gestures;
pub mod recognizer;
pub mod whistle;

pub use config::{GestureConfig, RecognizerConfig};
pub use error::Error;
pub use event::Event;
pub use gestures::{GestureOutput, GestureRecognizers, TickOutput};
pub use recognizer::{GestureKind, Recognition, Recognizer};
