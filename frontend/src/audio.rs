use rand::Rng;
use shared::sound::{
    AudioCue, Automation, Filter, FilterKind, NoiseBurst, Ramp, SynthBackend, Voice, Waveform,
};
use wasm_bindgen::JsValue;
use web_sys::{
    AudioContext, AudioContextState, AudioNode, AudioParam, BiquadFilterType, OscillatorType,
};

/// Web Audio synth. One context for the life of the page, created on first interaction.
pub struct WebAudioBackend {
    context: AudioContext,
}

impl WebAudioBackend {
    pub fn new() -> Option<Self> {
        match AudioContext::new() {
            Ok(context) => Some(Self { context }),
            Err(err) => {
                log::warn!("could not create AudioContext: {:?}", err);
                None
            }
        }
    }

    fn resume_context(&self) {
        if self.context.state() == AudioContextState::Suspended {
            let _ = self.context.resume();
        }
    }

    fn play_voice(&self, voice: &Voice, now: f64) -> Result<(), JsValue> {
        let oscillator = self.context.create_oscillator()?;
        oscillator.set_type(oscillator_type(voice.waveform));
        automate(&oscillator.frequency(), &voice.frequency, now)?;

        let gain = self.context.create_gain()?;
        automate(&gain.gain(), &voice.gain, now)?;

        self.route(&oscillator, voice.filter.as_ref(), &gain, now)?;
        gain.connect_with_audio_node(&self.context.destination())?;

        oscillator.start_with_when(now + voice.start)?;
        oscillator.stop_with_when(now + voice.stop)?;
        Ok(())
    }

    fn play_noise(&self, burst: &NoiseBurst, now: f64) -> Result<(), JsValue> {
        let sample_rate = self.context.sample_rate();
        let frames = ((burst.stop - burst.start) * sample_rate as f64).ceil().max(1.0) as u32;
        let buffer = self.context.create_buffer(1, frames, sample_rate)?;
        let mut rng = rand::thread_rng();
        let mut samples: Vec<f32> = (0..frames).map(|_| rng.gen_range(-1.0..1.0)).collect();
        buffer.copy_to_channel(&mut samples, 0)?;

        let source = self.context.create_buffer_source()?;
        source.set_buffer(Some(&buffer));

        let gain = self.context.create_gain()?;
        automate(&gain.gain(), &burst.gain, now)?;

        self.route(&source, burst.filter.as_ref(), &gain, now)?;
        gain.connect_with_audio_node(&self.context.destination())?;

        source.start_with_when(now + burst.start)?;
        source.stop_with_when(now + burst.stop)?;
        Ok(())
    }

    /// `source -> [filter] -> gain`
    fn route(
        &self,
        source: &AudioNode,
        filter: Option<&Filter>,
        gain: &AudioNode,
        now: f64,
    ) -> Result<(), JsValue> {
        match filter {
            Some(filter) => {
                let node = self.context.create_biquad_filter()?;
                node.set_type(match filter.kind {
                    FilterKind::LowPass => BiquadFilterType::Lowpass,
                    FilterKind::HighPass => BiquadFilterType::Highpass,
                });
                automate(&node.frequency(), &filter.cutoff, now)?;
                source.connect_with_audio_node(&node)?;
                node.connect_with_audio_node(gain)?;
            }
            None => {
                source.connect_with_audio_node(gain)?;
            }
        }
        Ok(())
    }
}

impl SynthBackend for WebAudioBackend {
    fn play(&self, cue: &AudioCue) {
        self.resume_context();
        let now = self.context.current_time();

        for voice in &cue.voices {
            if let Err(err) = self.play_voice(voice, now) {
                log::warn!("{:?} voice failed: {:?}", cue.kind, err);
            }
        }
        for burst in &cue.noise {
            if let Err(err) = self.play_noise(burst, now) {
                log::warn!("{:?} noise failed: {:?}", cue.kind, err);
            }
        }
    }
}

fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Square => OscillatorType::Square,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
        Waveform::Triangle => OscillatorType::Triangle,
    }
}

fn automate(param: &AudioParam, automation: &Automation, now: f64) -> Result<(), JsValue> {
    for step in &automation.steps {
        let at = now + step.at;
        match step.ramp {
            Ramp::Set => {
                param.set_value_at_time(step.value, at)?;
            }
            Ramp::Linear => {
                param.linear_ramp_to_value_at_time(step.value, at)?;
            }
            Ramp::Exponential => {
                param.exponential_ramp_to_value_at_time(step.value, at)?;
            }
        }
    }
    Ok(())
}
