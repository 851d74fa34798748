use crate::config::RecognizerConfig;
use crate::recognizer::{GestureKind, Recognition};

/// A change in a recognizer's held gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A gesture started, or was re-emitted while still held, locked to `bin`.
    Onset { bin: usize },
    /// The held gesture ended.
    Release,
}

/// The timing state of one recognizer, carried across ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RecognizerState {
    /// The bin a held gesture is locked to. Only set while `sounding`.
    pub locked: Option<usize>,
    /// Consecutive ticks without a detection.
    pub silent_ticks: u32,
    /// Ticks spent sounding since the last re-arm.
    pub sounding_ticks: u32,
    /// An onset has been emitted for the current stretch of sound.
    pub recording: bool,
    /// A gesture is being held.
    pub sounding: bool,
}

/// Debounces per-frame recognitions into onset and release transitions.
///
/// A frame is a detection when its score is above the threshold and its
/// dominant bin is within the lock tolerance of the locked bin, or of
/// itself when nothing is locked. The first detection emits an onset and
/// locks the dominant bin. The gesture is released once more than the
/// silence timeout has passed without a detection. While held, every
/// `min_event_ticks` sounding ticks the machine re-arms and the next
/// detection emits a new onset.
pub struct EventStateMachine {
    kind: GestureKind,
    threshold: f32,
    tolerance_bins: f32,
    min_event_ticks: u32,
    silence_timeout_ticks: u32,
    state: RecognizerState,
}

impl EventStateMachine {
    /// Creates an idle state machine. `config` is assumed to be valid,
    /// see [RecognizerConfig::validate].
    pub fn new(kind: GestureKind, config: &RecognizerConfig, resolution: usize) -> Self {
        EventStateMachine {
            kind,
            threshold: config.threshold,
            tolerance_bins: config.lock_tolerance_bins(resolution),
            min_event_ticks: config.min_event_ticks,
            silence_timeout_ticks: config.silence_timeout_ticks,
            state: RecognizerState::default(),
        }
    }

    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    pub fn state(&self) -> &RecognizerState {
        &self.state
    }

    pub fn is_sounding(&self) -> bool {
        self.state.sounding
    }

    pub fn locked_bin(&self) -> Option<usize> {
        self.state.locked
    }

    /// Returns the machine to the idle state.
    pub fn reset(&mut self) {
        self.state = RecognizerState::default();
    }

    /// Advances the machine by one tick of `dt` seconds. Ticks with a
    /// non-finite or non-positive `dt` are ignored.
    pub fn advance(&mut self, recognition: Recognition, dt: f32) -> Option<Transition> {
        if !dt.is_finite() || dt <= 0.0 {
            log::warn!("{}: ignoring tick with invalid dt {}", self.kind, dt);
            return None;
        }

        let bin = recognition.dominant_bin;
        let reference = self.state.locked.unwrap_or(bin);
        let detected = recognition.score > self.threshold
            && (bin.abs_diff(reference) as f32) < self.tolerance_bins;

        let state = &mut self.state;
        if detected {
            state.sounding = true;
            state.silent_ticks = 0;
        } else {
            state.silent_ticks = state.silent_ticks.saturating_add(1);
        }
        if state.sounding {
            state.sounding_ticks = state.sounding_ticks.saturating_add(1);
        }

        let mut transition = None;
        if state.sounding
            && elapsed(state.silent_ticks, dt) > elapsed(self.silence_timeout_ticks, dt)
        {
            state.locked = None;
            state.sounding = false;
            state.recording = false;
            state.silent_ticks = 0;
            log::debug!("{}: release", self.kind);
            transition = Some(Transition::Release);
        } else if !state.sounding {
            state.locked = None;
        }

        if elapsed(state.sounding_ticks, dt) > elapsed(self.min_event_ticks, dt) {
            state.sounding_ticks = 0;
            state.recording = false;
        }

        // A re-armed machine waits for an actual detection before emitting.
        if state.sounding && !state.recording && detected {
            state.recording = true;
            state.locked = Some(bin);
            log::debug!("{}: onset locked to bin {}", self.kind, bin);
            transition = Some(Transition::Onset { bin });
        }

        transition
    }
}

fn elapsed(ticks: u32, dt: f32) -> f32 {
    (ticks as f32) * dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const DT: f32 = 1.0 / 60.0;

    fn hit(bin: usize) -> Recognition {
        Recognition {
            score: 0.95,
            dominant_bin: bin,
        }
    }

    fn miss() -> Recognition {
        Recognition {
            score: 0.1,
            dominant_bin: 3,
        }
    }

    fn run(
        machine: &mut EventStateMachine,
        recognitions: impl IntoIterator<Item = Recognition>,
    ) -> Vec<(usize, Transition)> {
        recognitions
            .into_iter()
            .enumerate()
            .filter_map(|(tick, recognition)| {
                machine.advance(recognition, DT).map(|t| (tick, t))
            })
            .collect()
    }

    fn short_gesture() -> impl Iterator<Item = Recognition> {
        core::iter::repeat(hit(40))
            .take(5)
            .chain(core::iter::repeat(miss()).take(30))
    }

    #[test]
    fn test_short_click_emits_one_onset_and_one_release() {
        let mut machine =
            EventStateMachine::new(GestureKind::Click, &RecognizerConfig::click(), 256);
        let transitions = run(&mut machine, short_gesture());
        assert_eq!(
            transitions,
            [(0, Transition::Onset { bin: 40 }), (30, Transition::Release)]
        );
        assert!(!machine.is_sounding());
        assert_eq!(machine.locked_bin(), None);
    }

    #[test]
    fn test_short_whistle_emits_one_onset_and_one_release() {
        // The whistle re-arms twice during the silence but never re-emits.
        let mut machine =
            EventStateMachine::new(GestureKind::Whistle, &RecognizerConfig::whistle(), 256);
        let transitions = run(&mut machine, short_gesture());
        assert_eq!(
            transitions,
            [(0, Transition::Onset { bin: 40 }), (30, Transition::Release)]
        );
    }

    #[test]
    fn test_held_whistle_re_emits_onsets() {
        let mut machine =
            EventStateMachine::new(GestureKind::Whistle, &RecognizerConfig::whistle(), 256);
        let transitions = run(&mut machine, core::iter::repeat(hit(100)).take(40));
        let ticks: Vec<usize> = transitions.iter().map(|(tick, _)| *tick).collect();
        assert_eq!(ticks, [0, 10, 21, 32]);
        assert!(transitions
            .iter()
            .all(|(_, t)| *t == Transition::Onset { bin: 100 }));
        assert!(machine.is_sounding());
    }

    #[test]
    fn test_lock_tolerance() {
        // 5% of 256 bins is 12.8 bins.
        let mut machine =
            EventStateMachine::new(GestureKind::Whistle, &RecognizerConfig::whistle(), 256);
        assert_eq!(
            machine.advance(hit(100), DT),
            Some(Transition::Onset { bin: 100 })
        );

        // Too far from the lock, counts as silence.
        machine.advance(hit(120), DT);
        assert_eq!(machine.state().silent_ticks, 1);
        assert_eq!(machine.locked_bin(), Some(100));

        // Close enough, the lock holds.
        machine.advance(hit(110), DT);
        assert_eq!(machine.state().silent_ticks, 0);
        assert_eq!(machine.locked_bin(), Some(100));

        let transitions = run(&mut machine, core::iter::repeat(hit(120)).take(26));
        assert_eq!(transitions, [(25, Transition::Release)]);
        assert_eq!(machine.locked_bin(), None);

        // With the lock cleared the far bin starts a new gesture.
        assert_eq!(
            machine.advance(hit(120), DT),
            Some(Transition::Onset { bin: 120 })
        );
    }

    #[test]
    fn test_click_accepts_any_bin() {
        let mut machine =
            EventStateMachine::new(GestureKind::Click, &RecognizerConfig::click(), 256);
        machine.advance(hit(0), DT);
        machine.advance(hit(255), DT);
        assert_eq!(machine.state().silent_ticks, 0);
        assert_eq!(machine.locked_bin(), Some(0));
    }

    #[test]
    fn test_threshold_is_strict() {
        let config = RecognizerConfig::click();
        let mut machine = EventStateMachine::new(GestureKind::Click, &config, 256);
        let at_threshold = Recognition {
            score: config.threshold,
            dominant_bin: 10,
        };
        assert_eq!(machine.advance(at_threshold, DT), None);
        assert!(!machine.is_sounding());
    }

    #[test]
    fn test_lock_implies_sounding() {
        let mut rng = StdRng::seed_from_u64(789);
        for (kind, config) in [
            (GestureKind::Click, RecognizerConfig::click()),
            (GestureKind::Whistle, RecognizerConfig::whistle()),
        ]
        .iter()
        {
            let mut machine = EventStateMachine::new(*kind, config, 512);
            let mut onsets = 0;
            let mut releases = 0;
            for _ in 0..5000 {
                let recognition = Recognition {
                    score: rng.gen_range(0.0..=1.0),
                    dominant_bin: rng.gen_range(200..280),
                };
                match machine.advance(recognition, DT) {
                    Some(Transition::Onset { .. }) => onsets += 1,
                    Some(Transition::Release) => releases += 1,
                    None => {}
                }
                let state = machine.state();
                assert!(state.locked.is_none() || state.sounding);
                assert!(!state.recording || state.sounding);
            }
            assert!(onsets > 0);
            assert!(releases <= onsets);
        }
    }

    #[test]
    fn test_invalid_dt_is_ignored() {
        let mut machine =
            EventStateMachine::new(GestureKind::Whistle, &RecognizerConfig::whistle(), 256);
        machine.advance(hit(100), DT);
        let before = *machine.state();
        for dt in [0.0, -DT, f32::NAN, f32::INFINITY].iter() {
            assert_eq!(machine.advance(hit(100), *dt), None);
            assert_eq!(machine.advance(miss(), *dt), None);
            assert_eq!(*machine.state(), before);
        }
    }

    #[test]
    fn test_deterministic_replay() {
        let mut rng = StdRng::seed_from_u64(42);
        let recognitions: Vec<Recognition> = (0..2000)
            .map(|_| Recognition {
                score: rng.gen_range(0.5..=1.0),
                dominant_bin: rng.gen_range(90..130),
            })
            .collect();
        let config = RecognizerConfig::whistle();
        let mut first = EventStateMachine::new(GestureKind::Whistle, &config, 256);
        let mut second = EventStateMachine::new(GestureKind::Whistle, &config, 256);
        assert_eq!(
            run(&mut first, recognitions.iter().copied()),
            run(&mut second, recognitions.iter().copied())
        );
        assert_eq!(first.state(), second.state());
    }

    #[test]
    fn test_reset() {
        let mut machine =
            EventStateMachine::new(GestureKind::Click, &RecognizerConfig::click(), 256);
        machine.advance(hit(40), DT);
        assert!(machine.is_sounding());
        machine.reset();
        assert_eq!(*machine.state(), RecognizerState::default());
        assert_eq!(
            machine.advance(hit(41), DT),
            Some(Transition::Onset { bin: 41 })
        );
    }
}
