use rand::Rng;
use serde::{Deserialize, Serialize};

/// Level every decay ramps down to; exponential ramps cannot reach zero.
pub const SILENCE: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ramp {
    Set,
    Linear,
    Exponential,
}

/// One automation event. `at` is seconds from the moment the cue is played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamStep {
    pub ramp: Ramp,
    pub value: f32,
    pub at: f64,
}

/// Ordered automation events for one audio parameter, Web Audio style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Automation {
    pub steps: Vec<ParamStep>,
}

impl Automation {
    pub fn constant(value: f32) -> Self {
        Self::default().set(value, 0.0)
    }

    pub fn set(self, value: f32, at: f64) -> Self {
        self.push(Ramp::Set, value, at)
    }

    pub fn linear(self, value: f32, at: f64) -> Self {
        self.push(Ramp::Linear, value, at)
    }

    pub fn exponential(self, value: f32, at: f64) -> Self {
        self.push(Ramp::Exponential, value, at)
    }

    fn push(mut self, ramp: Ramp, value: f32, at: f64) -> Self {
        self.steps.push(ParamStep { ramp, value, at });
        self
    }

    /// Parameter value at `t` seconds.
    ///
    /// Before the first event the first value holds. A ramp event moves from the
    /// previous event's value to its own, arriving at its own time.
    pub fn value_at(&self, t: f64) -> f32 {
        let Some(first) = self.steps.first() else {
            return 0.0;
        };
        if t <= first.at {
            return first.value;
        }

        let mut previous = *first;
        for step in &self.steps[1..] {
            if t < step.at {
                let span = step.at - previous.at;
                let progress = ((t - previous.at) / span) as f32;
                return match step.ramp {
                    Ramp::Set => previous.value,
                    Ramp::Linear => previous.value + (step.value - previous.value) * progress,
                    Ramp::Exponential => {
                        if previous.value == 0.0 || previous.value.signum() != step.value.signum() {
                            previous.value
                        } else {
                            previous.value * (step.value / previous.value).powf(progress)
                        }
                    }
                };
            }
            previous = *step;
        }
        previous.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    LowPass,
    HighPass,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub kind: FilterKind,
    pub cutoff: Automation,
}

/// A single oscillator routed (optionally through a filter) into its own gain.
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub waveform: Waveform,
    pub frequency: Automation,
    pub gain: Automation,
    pub filter: Option<Filter>,
    pub start: f64,
    pub stop: f64,
}

/// White noise burst, used for the percussive edge of the tick.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseBurst {
    pub gain: Automation,
    pub filter: Option<Filter>,
    pub start: f64,
    pub stop: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueKind {
    Click,
    Tick,
    Win,
    Lose,
    SpinStart,
    Settle,
}

/// Synthesis recipe for one sound effect. Built fresh for every play.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioCue {
    pub kind: CueKind,
    pub voices: Vec<Voice>,
    pub noise: Vec<NoiseBurst>,
}

const WIN_ARPEGGIO: [f32; 7] = [523.0, 659.0, 784.0, 880.0, 1047.0, 1319.0, 1568.0]; // C5 to G6
const WIN_NOTE_STEP: f64 = 0.08;
const SPARKLE_COUNT: usize = 5;

fn decay(peak: f32, at: f64, until: f64) -> Automation {
    Automation::default().set(peak, at).exponential(SILENCE, until)
}

fn sweep(from: f32, to: f32, until: f64) -> Automation {
    Automation::default().set(from, 0.0).exponential(to, until)
}

impl Voice {
    fn new(waveform: Waveform, frequency: Automation, gain: Automation, stop: f64) -> Self {
        Self {
            waveform,
            frequency,
            gain,
            filter: None,
            start: 0.0,
            stop,
        }
    }

    fn starting(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    fn filtered(mut self, kind: FilterKind, cutoff: Automation) -> Self {
        self.filter = Some(Filter { kind, cutoff });
        self
    }
}

impl AudioCue {
    /// Button press: low kick, bright click, short electronic blip.
    pub fn click() -> Self {
        let kick = Voice::new(Waveform::Sine, sweep(150.0, 50.0, 0.1), decay(0.3, 0.0, 0.15), 0.15);
        let click = Voice::new(
            Waveform::Square,
            sweep(800.0, 400.0, 0.05),
            decay(0.2, 0.0, 0.08),
            0.08,
        );
        let blip = Voice::new(
            Waveform::Sawtooth,
            Automation::default()
                .set(600.0, 0.0)
                .set(900.0, 0.02)
                .set(600.0, 0.04),
            decay(0.1, 0.0, 0.1),
            0.1,
        );
        Self {
            kind: CueKind::Click,
            voices: vec![kick, click, blip],
            noise: Vec::new(),
        }
    }

    /// Slot-machine style tick with a metallic overtone and a noise transient.
    pub fn tick() -> Self {
        let body = Voice::new(
            Waveform::Square,
            sweep(1200.0, 600.0, 0.03),
            decay(0.15, 0.0, 0.06),
            0.06,
        );
        let overtone = Voice::new(
            Waveform::Sine,
            Automation::constant(2400.0),
            decay(0.08, 0.0, 0.04),
            0.04,
        );
        let transient = NoiseBurst {
            gain: decay(0.1, 0.0, 0.03),
            filter: Some(Filter {
                kind: FilterKind::HighPass,
                cutoff: Automation::constant(3000.0),
            }),
            start: 0.0,
            stop: 0.03,
        };
        Self {
            kind: CueKind::Tick,
            voices: vec![body, overtone],
            noise: vec![transient],
        }
    }

    /// Ascending fanfare: staggered arpeggio, high sparkles, bass swell.
    pub fn win<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut sparkles = [0.0f32; SPARKLE_COUNT];
        for sparkle in sparkles.iter_mut() {
            *sparkle = 2000.0 + rng.gen::<f32>() * 2000.0;
        }
        Self::win_with_sparkles(sparkles)
    }

    pub fn win_with_sparkles(sparkles: [f32; SPARKLE_COUNT]) -> Self {
        let mut voices = Vec::with_capacity(WIN_ARPEGGIO.len() + SPARKLE_COUNT + 1);

        for (step, frequency) in WIN_ARPEGGIO.iter().enumerate() {
            let start = step as f64 * WIN_NOTE_STEP;
            let gain = Automation::default()
                .set(0.0, start)
                .linear(0.15, start + 0.02)
                .set(0.15, start + 0.1)
                .exponential(SILENCE, start + 0.4);
            let cutoff = Automation::default()
                .set(2000.0, start)
                .linear(5000.0, start + 0.1);
            voices.push(
                Voice::new(Waveform::Sawtooth, Automation::constant(*frequency), gain, start + 0.4)
                    .starting(start)
                    .filtered(FilterKind::LowPass, cutoff),
            );
        }

        for (step, frequency) in sparkles.iter().enumerate() {
            let start = 0.5 + step as f64 * 0.1;
            voices.push(
                Voice::new(
                    Waveform::Sine,
                    Automation::constant(*frequency),
                    decay(0.1, start, start + 0.15),
                    start + 0.15,
                )
                .starting(start),
            );
        }

        voices.push(Voice::new(
            Waveform::Sine,
            Automation::default().set(80.0, 0.0).linear(60.0, 0.5),
            decay(0.25, 0.0, 0.6),
            0.6,
        ));

        Self {
            kind: CueKind::Win,
            voices,
            noise: Vec::new(),
        }
    }

    /// Descending comedy sequence: slide, wobbling spring, muted "wah".
    pub fn lose() -> Self {
        let slide = Voice::new(
            Waveform::Sawtooth,
            sweep(600.0, 100.0, 0.5),
            decay(0.15, 0.0, 0.5),
            0.5,
        );

        let mut spring_pitch = Automation::default();
        for (step, frequency) in [400.0, 300.0, 350.0, 280.0, 320.0, 250.0].iter().enumerate() {
            spring_pitch = spring_pitch.set(*frequency, 0.5 + step as f64 * 0.05);
        }
        let spring = Voice::new(Waveform::Sine, spring_pitch, decay(0.12, 0.5, 0.85), 0.85).starting(0.5);

        let wah = Voice::new(
            Waveform::Triangle,
            Automation::default()
                .set(350.0, 0.9)
                .linear(300.0, 1.1)
                .linear(280.0, 1.3),
            Automation::default()
                .set(0.1, 0.9)
                .set(0.08, 1.1)
                .exponential(SILENCE, 1.4),
            1.4,
        )
        .starting(0.9)
        .filtered(FilterKind::LowPass, Automation::constant(1000.0));

        Self {
            kind: CueKind::Lose,
            voices: vec![slide, spring, wah],
            noise: Vec::new(),
        }
    }

    /// Rising sweep played as the wheel is released.
    pub fn spin_start() -> Self {
        Self {
            kind: CueKind::SpinStart,
            voices: vec![Voice::new(
                Waveform::Sawtooth,
                sweep(100.0, 500.0, 0.3),
                decay(0.15, 0.0, 0.4),
                0.4,
            )],
            noise: Vec::new(),
        }
    }

    /// Falling sweep played when the wheel comes to rest.
    pub fn settle() -> Self {
        Self {
            kind: CueKind::Settle,
            voices: vec![Voice::new(
                Waveform::Sine,
                sweep(800.0, 200.0, 0.3),
                decay(0.2, 0.0, 0.35),
                0.35,
            )],
            noise: Vec::new(),
        }
    }

    /// Seconds until the last voice or burst stops.
    pub fn duration(&self) -> f64 {
        self.voices
            .iter()
            .map(|voice| voice.stop)
            .chain(self.noise.iter().map(|burst| burst.stop))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_cues() -> Vec<AudioCue> {
        let mut rng = StdRng::seed_from_u64(1);
        vec![
            AudioCue::click(),
            AudioCue::tick(),
            AudioCue::win(&mut rng),
            AudioCue::lose(),
            AudioCue::spin_start(),
            AudioCue::settle(),
        ]
    }

    #[test]
    fn test_every_voice_decays_to_silence_by_stop() {
        for cue in all_cues() {
            for voice in &cue.voices {
                assert!(voice.stop > voice.start, "{:?}", cue.kind);
                assert!(voice.gain.value_at(voice.stop) <= SILENCE + f32::EPSILON, "{:?}", cue.kind);
            }
            for burst in &cue.noise {
                assert!(burst.gain.value_at(burst.stop) <= SILENCE + f32::EPSILON);
            }
        }
    }

    #[test]
    fn test_exponential_decay_shape() {
        let gain = decay(0.2, 0.0, 0.1);
        let quarter = gain.value_at(0.025);
        let half = gain.value_at(0.05);
        assert!(quarter < 0.2 && quarter > half);
        // Halfway through an exponential ramp sits at the geometric mean
        assert!((half - (0.2f32 * SILENCE).sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_win_arpeggio_attacks_then_decays() {
        let cue = AudioCue::win_with_sparkles([2500.0; 5]);
        assert_eq!(cue.voices.len(), 13);
        let third = &cue.voices[2];
        assert!((third.start - 0.16).abs() < 1e-9);
        assert_eq!(third.gain.value_at(third.start), 0.0);
        assert!((third.gain.value_at(third.start + 0.02) - 0.15).abs() < 1e-6);
        assert!(third.gain.value_at(third.start + 0.3) < 0.15);

        let pitches: Vec<f32> = cue.voices[..7].iter().map(|v| v.frequency.value_at(0.0)).collect();
        assert!(pitches.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_win_sparkles_in_band() {
        let mut rng = StdRng::seed_from_u64(99);
        let cue = AudioCue::win(&mut rng);
        for sparkle in &cue.voices[7..12] {
            let frequency = sparkle.frequency.value_at(0.0);
            assert!((2000.0..4000.0).contains(&frequency));
        }
    }

    #[test]
    fn test_lose_descends() {
        let cue = AudioCue::lose();
        let slide = &cue.voices[0];
        assert!(slide.frequency.value_at(0.0) > slide.frequency.value_at(0.25));
        assert!((slide.frequency.value_at(0.5) - 100.0).abs() < 1e-3);
        let wah = &cue.voices[2];
        assert!(wah.frequency.value_at(0.9) > wah.frequency.value_at(1.3));
        assert!((cue.duration() - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_stepped_automation_holds() {
        let blip = &AudioCue::click().voices[2];
        assert_eq!(blip.frequency.value_at(0.01), 600.0);
        assert_eq!(blip.frequency.value_at(0.03), 900.0);
        assert_eq!(blip.frequency.value_at(0.09), 600.0);
    }

    #[test]
    fn test_cue_durations() {
        assert!((AudioCue::click().duration() - 0.15).abs() < 1e-9);
        assert!((AudioCue::tick().duration() - 0.06).abs() < 1e-9);
        assert!((AudioCue::settle().duration() - 0.35).abs() < 1e-9);
        assert!(Automation::default().value_at(1.0) == 0.0);
    }
}
