use crate::click::ClickScorer;
use crate::config::GestureConfig;
use crate::error::Error;
use crate::event::{Event, EventStateMachine, Transition};
use crate::recognizer::{GestureKind, Recognition, Recognizer};
use crate::whistle::{AxisMapper, WhistleScorer};

/// The per-tick result of one recognizer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureOutput<T> {
    /// The frame's score, reported on every tick for metering.
    pub score: f32,
    pub event: Option<Event<T>>,
}

/// Everything produced for a single frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickOutput {
    /// Clicks act as a button: pressed on onset, released on release.
    pub click: GestureOutput<bool>,
    /// Whistles act as a stick, see [AxisMapper].
    pub whistle: GestureOutput<[f32; 2]>,
}

/// Runs the click and whistle recognizers on a stream of spectrum frames.
///
/// Feed one frame per tick to [process](GestureRecognizers::process).
/// Frames must have the resolution the recognizers were created with.
pub struct GestureRecognizers {
    resolution: usize,
    click_scorer: ClickScorer,
    click_events: EventStateMachine,
    whistle_scorer: WhistleScorer,
    whistle_events: EventStateMachine,
    axis_mapper: AxisMapper,
}

impl GestureRecognizers {
    pub fn new(config: GestureConfig) -> Result<Self, Error> {
        config.validate()?;
        let resolution = config.resolution;
        let axis_mapper = AxisMapper::for_resolution(resolution)
            .ok_or(Error::UnsupportedResolution(resolution))?;
        log::debug!("creating gesture recognizers for {} bins", resolution);
        Ok(GestureRecognizers {
            resolution,
            click_scorer: ClickScorer::new(resolution),
            click_events: EventStateMachine::new(GestureKind::Click, &config.click, resolution),
            whistle_scorer: WhistleScorer::new(resolution),
            whistle_events: EventStateMachine::new(
                GestureKind::Whistle,
                &config.whistle,
                resolution,
            ),
            axis_mapper,
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn axis_mapper(&self) -> &AxisMapper {
        &self.axis_mapper
    }

    /// Returns the state machine of the recognizer for `kind`.
    pub fn events(&self, kind: GestureKind) -> &EventStateMachine {
        match kind {
            GestureKind::Click => &self.click_events,
            GestureKind::Whistle => &self.whistle_events,
        }
    }

    /// Scores `frame` with both recognizers and advances their state
    /// machines by `dt` seconds.
    pub fn process(&mut self, frame: &[f32], dt: f32) -> TickOutput {
        if frame.len() != self.resolution {
            log::warn!(
                "expected a frame of {} bins, got {}",
                self.resolution,
                frame.len()
            );
        }

        let click = self.click_scorer.recognize(frame);
        let whistle = self.whistle_scorer.recognize(frame);
        log::trace!("scores: click {} whistle {}", click.score, whistle.score);

        TickOutput {
            click: self.click_output(click, dt),
            whistle: self.whistle_output(whistle, dt),
        }
    }

    /// Returns both recognizers to the idle state.
    pub fn reset(&mut self) {
        self.click_events.reset();
        self.whistle_events.reset();
    }

    fn click_output(&mut self, recognition: Recognition, dt: f32) -> GestureOutput<bool> {
        let event = self
            .click_events
            .advance(recognition, dt)
            .map(|transition| match transition {
                Transition::Onset { .. } => Event::Onset(true),
                Transition::Release => Event::Release(false),
            });
        GestureOutput {
            score: recognition.score,
            event,
        }
    }

    fn whistle_output(&mut self, recognition: Recognition, dt: f32) -> GestureOutput<[f32; 2]> {
        let valid_tick = dt.is_finite() && dt > 0.0;
        let event = match self.whistle_events.advance(recognition, dt) {
            Some(Transition::Onset { bin }) => Some(Event::Onset(self.axis_mapper.map(bin))),
            Some(Transition::Release) => Some(Event::Release(AxisMapper::rest())),
            // The stick follows the locked bin on every tick of a held whistle.
            None => match self.whistle_events.locked_bin() {
                Some(bin) if valid_tick => Some(Event::Tick(self.axis_mapper.map(bin))),
                _ => None,
            },
        };
        GestureOutput {
            score: recognition.score,
            event,
        }
    }
}
