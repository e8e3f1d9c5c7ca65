use std::ops::Range;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

pub const FULL_TURN: f64 = 360.0;

// Constants for the wheel animation
pub const SPIN_DURATION_MS: u32 = 5000; // Full spin
pub const STOP_DURATION_MS: u32 = 1500; // Spin cut short by "stop now"
pub const MIN_SPINS: u32 = 5; // Minimum number of extra full rotations
pub const MAX_SPINS: u32 = 8; // Exclusive upper bound
pub const STOP_SPINS: u32 = 1; // Extra rotations after an early stop

pub fn angle_per_segment(segments: usize) -> f64 {
    FULL_TURN / segments.max(1) as f64
}

/// Normalizes any angle into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= FULL_TURN {
        0.0
    } else {
        normalized
    }
}

/// Orientation (mod 360) that puts the centre of `index` under the top pointer.
pub fn resting_angle(index: usize, segments: usize) -> f64 {
    FULL_TURN - (index as f64 + 0.5) * angle_per_segment(segments)
}

/// Clockwise distance from `current` to `target`, always in (0, 360].
pub fn forward_delta(target: f64, current: f64) -> f64 {
    let mut delta = normalize_degrees(target) - normalize_degrees(current);
    if delta <= 0.0 {
        delta += FULL_TURN;
    }
    delta
}

/// Index of the segment under the pointer for a wheel rotated by `angle` degrees clockwise.
pub fn segment_at_pointer(angle: f64, segments: usize) -> usize {
    let under_pointer = normalize_degrees(FULL_TURN - normalize_degrees(angle));
    let index = (under_pointer / angle_per_segment(segments)).floor() as usize;
    index.min(segments.max(1) - 1)
}

/// What an early stop lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarlyStopPolicy {
    /// Stopping is a fresh, independent draw.
    #[default]
    Reroll,
    /// Stopping lands on the prize picked when the spin started.
    KeepSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinKind {
    Full,
    EarlyStop,
}

/// One leg of wheel motion, consumed once when its completion fires.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinRequest {
    pub selected_index: usize,
    pub start_angle: f64,
    pub target_angle: f64,
    pub duration_ms: u32,
    pub generation: u64,
    pub kind: SpinKind,
}

impl SpinRequest {
    pub fn rotation(&self) -> f64 {
        self.target_angle - self.start_angle
    }
}

/// "Spin ended" event handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinEnded {
    pub selected_index: usize,
    pub early_stopped: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelState {
    pub current_angle_degrees: f64,
    pub is_spinning: bool,
    pub pending_stop: bool,
    pub generation: u64,
}

/// Source of randomness for prize selection and turn count.
pub trait IndexPicker {
    fn pick_index(&mut self, segments: usize) -> usize;
    fn pick_turns(&mut self, turns: Range<u32>) -> u32;
}

/// Uniform selection over every slot, sentinel included.
pub struct UniformPicker<R> {
    rng: R,
}

impl<R: RngCore> UniformPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> IndexPicker for UniformPicker<R> {
    fn pick_index(&mut self, segments: usize) -> usize {
        self.rng.gen_range(0..segments.max(1))
    }

    fn pick_turns(&mut self, turns: Range<u32>) -> u32 {
        if turns.is_empty() {
            turns.start
        } else {
            self.rng.gen_range(turns)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinSettings {
    pub spin_duration_ms: u32,
    pub stop_duration_ms: u32,
    pub min_turns: u32,
    pub max_turns: u32,
    pub stop_turns: u32,
    pub early_stop: EarlyStopPolicy,
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            stop_duration_ms: STOP_DURATION_MS,
            min_turns: MIN_SPINS,
            max_turns: MAX_SPINS,
            stop_turns: STOP_SPINS,
            early_stop: EarlyStopPolicy::default(),
        }
    }
}

/// Owns the wheel rotation and decides every landing.
pub struct SpinController {
    segments: usize,
    settings: SpinSettings,
    state: WheelState,
    picker: Box<dyn IndexPicker>,
    in_flight: Option<SpinRequest>,
}

impl SpinController {
    pub fn new(segments: usize, settings: SpinSettings, picker: Box<dyn IndexPicker>) -> Self {
        Self {
            segments: segments.max(1),
            settings,
            state: WheelState::default(),
            picker,
            in_flight: None,
        }
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn settings(&self) -> &SpinSettings {
        &self.settings
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn in_flight(&self) -> Option<&SpinRequest> {
        self.in_flight.as_ref()
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning
    }

    /// Picks a prize and commits the rotation that lands on it. `None` while already spinning.
    pub fn start_spin(&mut self) -> Option<SpinRequest> {
        if self.state.is_spinning {
            return None;
        }

        let index = self.picker.pick_index(self.segments);
        let turns = self
            .picker
            .pick_turns(self.settings.min_turns..self.settings.max_turns);

        self.state.is_spinning = true;
        self.state.pending_stop = false;
        let request = self.plan(index, turns, self.settings.spin_duration_ms, SpinKind::Full);
        log::debug!(
            "spin {} planned: index {} after {} turns, {:.2} -> {:.2}",
            request.generation,
            index,
            turns,
            request.start_angle,
            request.target_angle
        );
        Some(request)
    }

    /// Cuts the running spin short. `None` when idle or when a stop is already pending.
    pub fn request_early_stop(&mut self) -> Option<SpinRequest> {
        if !self.state.is_spinning || self.state.pending_stop {
            return None;
        }

        let index = match (self.settings.early_stop, &self.in_flight) {
            (EarlyStopPolicy::KeepSelection, Some(request)) => request.selected_index,
            _ => self.picker.pick_index(self.segments),
        };

        self.state.pending_stop = true;
        let request = self.plan(
            index,
            self.settings.stop_turns,
            self.settings.stop_duration_ms,
            SpinKind::EarlyStop,
        );
        log::debug!(
            "spin {} stopped early: index {}, {:.2} -> {:.2}",
            request.generation,
            index,
            request.start_angle,
            request.target_angle
        );
        Some(request)
    }

    /// Finishes the leg identified by `generation`. Stale or duplicate completions yield `None`.
    pub fn complete(&mut self, generation: u64) -> Option<usize> {
        if !self.state.is_spinning || generation != self.state.generation {
            return None;
        }
        let request = self.in_flight.take()?;
        self.state.is_spinning = false;
        self.state.pending_stop = false;
        Some(request.selected_index)
    }

    fn plan(&mut self, index: usize, turns: u32, duration_ms: u32, kind: SpinKind) -> SpinRequest {
        let start_angle = self.state.current_angle_degrees;
        let delta = forward_delta(resting_angle(index, self.segments), start_angle);
        let target_angle = start_angle + turns as f64 * FULL_TURN + delta;

        self.state.current_angle_degrees = target_angle;
        self.state.generation += 1;

        let request = SpinRequest {
            selected_index: index,
            start_angle,
            target_angle,
            duration_ms,
            generation: self.state.generation,
            kind,
        };
        self.in_flight = Some(request.clone());
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPicker;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPSILON: f64 = 1e-9;

    fn lands_on_centre(angle: f64, index: usize, segments: usize) -> bool {
        let aps = angle_per_segment(segments);
        let offset = (FULL_TURN - normalize_degrees(angle)).rem_euclid(aps);
        (offset - aps / 2.0).abs() < 1e-6 && segment_at_pointer(angle, segments) == index
    }

    #[test]
    fn test_uniform_selection() {
        let segments = 16;
        let trials = 100_000;
        let mut picker = UniformPicker::new(StdRng::seed_from_u64(2026));
        let mut counts = vec![0u32; segments];
        for _ in 0..trials {
            counts[picker.pick_index(segments)] += 1;
        }
        let expected = 1.0 / segments as f64;
        for count in counts {
            let frequency = count as f64 / trials as f64;
            assert!((frequency - expected).abs() < 0.005, "frequency {}", frequency);
        }
    }

    #[test]
    fn test_turns_stay_in_range() {
        let mut picker = UniformPicker::new(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let turns = picker.pick_turns(MIN_SPINS..MAX_SPINS);
            assert!((5..8).contains(&turns));
        }
        assert_eq!(picker.pick_turns(3..3), 3);
    }

    #[test]
    fn test_landing_for_every_index_and_start() {
        for segments in [1, 2, 3, 7, 16] {
            for index in 0..segments {
                for start in [0.0, 0.1, 44.9, 180.0, 359.99, 1234.5, 7200.0] {
                    let delta = forward_delta(resting_angle(index, segments), start);
                    assert!(delta > 0.0 && delta <= FULL_TURN);
                    let final_angle = start + 5.0 * FULL_TURN + delta;
                    assert!(lands_on_centre(final_angle, index, segments));
                }
            }
        }
    }

    #[test]
    fn test_forward_delta_never_zero() {
        let target = resting_angle(3, 8);
        assert!((forward_delta(target, target) - FULL_TURN).abs() < EPSILON);
        assert!((forward_delta(target, target + 720.0) - FULL_TURN).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_negative_and_large() {
        assert!((normalize_degrees(-90.0) - 270.0).abs() < EPSILON);
        assert!((normalize_degrees(725.0) - 5.0).abs() < EPSILON);
        assert!(normalize_degrees(-1e-18) < FULL_TURN);
    }

    #[test]
    fn test_start_spin_commits_target() {
        let mut controller = SpinController::new(
            16,
            SpinSettings::default(),
            Box::new(ScriptedPicker::new(vec![7], 6)),
        );
        let request = controller.start_spin().unwrap();
        assert_eq!(request.selected_index, 7);
        assert_eq!(request.duration_ms, SPIN_DURATION_MS);
        assert_eq!(request.kind, SpinKind::Full);
        assert!(request.rotation() > 6.0 * FULL_TURN);
        assert!(request.rotation() <= 7.0 * FULL_TURN);
        assert!(controller.is_spinning());
        assert_eq!(controller.state().current_angle_degrees, request.target_angle);
        assert!(lands_on_centre(request.target_angle, 7, 16));
    }

    #[test]
    fn test_start_while_spinning_is_ignored() {
        let mut controller = SpinController::new(
            4,
            SpinSettings::default(),
            Box::new(ScriptedPicker::new(vec![1, 2], 5)),
        );
        let first = controller.start_spin().unwrap();
        assert!(controller.start_spin().is_none());
        assert_eq!(controller.state().generation, first.generation);
    }

    #[test]
    fn test_angle_accumulates_across_spins() {
        let mut controller = SpinController::new(
            8,
            SpinSettings::default(),
            Box::new(ScriptedPicker::new(vec![3, 3, 0, 5], 5)),
        );
        let mut last = 0.0;
        for _ in 0..4 {
            let request = controller.start_spin().unwrap();
            assert_eq!(request.start_angle, last);
            assert!(request.target_angle > last);
            assert_eq!(controller.complete(request.generation), Some(request.selected_index));
            last = request.target_angle;
        }
        assert!(!controller.is_spinning());
    }

    #[test]
    fn test_early_stop_rerolls() {
        let mut controller = SpinController::new(
            16,
            SpinSettings::default(),
            Box::new(ScriptedPicker::new(vec![7, 2], 5)),
        );
        let first = controller.start_spin().unwrap();
        let stop = controller.request_early_stop().unwrap();
        assert_eq!(stop.selected_index, 2);
        assert_eq!(stop.kind, SpinKind::EarlyStop);
        assert_eq!(stop.duration_ms, STOP_DURATION_MS);
        assert_eq!(stop.start_angle, first.target_angle);
        assert!(stop.rotation() > FULL_TURN && stop.rotation() <= 2.0 * FULL_TURN);
        assert!(lands_on_centre(stop.target_angle, 2, 16));

        assert_eq!(controller.complete(first.generation), None);
        assert_eq!(controller.complete(stop.generation), Some(2));
        assert_eq!(controller.complete(stop.generation), None);
    }

    #[test]
    fn test_early_stop_keeps_selection() {
        let settings = SpinSettings {
            early_stop: EarlyStopPolicy::KeepSelection,
            ..SpinSettings::default()
        };
        let mut controller =
            SpinController::new(16, settings, Box::new(ScriptedPicker::new(vec![9, 1], 5)));
        controller.start_spin().unwrap();
        let stop = controller.request_early_stop().unwrap();
        assert_eq!(stop.selected_index, 9);
        assert!(lands_on_centre(stop.target_angle, 9, 16));
    }

    #[test]
    fn test_early_stop_guards() {
        let mut controller = SpinController::new(
            6,
            SpinSettings::default(),
            Box::new(ScriptedPicker::new(vec![0, 1, 2], 5)),
        );
        assert!(controller.request_early_stop().is_none());
        controller.start_spin().unwrap();
        assert!(controller.request_early_stop().is_some());
        assert!(controller.state().pending_stop);
        assert!(controller.request_early_stop().is_none());
    }
}
