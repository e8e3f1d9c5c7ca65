use std::cell::Cell;

use once_cell::unsync::OnceCell;

use super::cue::AudioCue;

/// Whatever turns a cue recipe into audible output.
pub trait SynthBackend {
    fn play(&self, cue: &AudioCue);
}

type BackendFactory<B> = Box<dyn Fn() -> Option<B>>;

/// Handle to the process-lifetime synth.
///
/// The backend is created on the first user interaction (`init`, or implicitly
/// by `play_click`) and never torn down. When it cannot be created every play
/// call is a silent no-op, as is every call while sound is disabled.
pub struct SoundEngine<B: SynthBackend> {
    factory: BackendFactory<B>,
    backend: OnceCell<Option<B>>,
    enabled: Cell<bool>,
}

impl<B: SynthBackend> SoundEngine<B> {
    pub fn new(factory: impl Fn() -> Option<B> + 'static, enabled: bool) -> Self {
        Self {
            factory: Box::new(factory),
            backend: OnceCell::new(),
            enabled: Cell::new(enabled),
        }
    }

    /// Engine that never makes a sound, for environments without audio.
    pub fn silent() -> Self {
        Self::new(|| None, false)
    }

    /// Creates the backend if this is the first call. Returns whether audio is usable.
    pub fn init(&self) -> bool {
        self.backend
            .get_or_init(|| {
                let backend = (self.factory)();
                if backend.is_none() {
                    log::warn!("audio synthesis unavailable, sound cues disabled");
                }
                backend
            })
            .is_some()
    }

    pub fn is_available(&self) -> bool {
        matches!(self.backend.get(), Some(Some(_)))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn play_click(&self) {
        self.init();
        self.play_with(AudioCue::click);
    }

    pub fn play_tick(&self) {
        self.play_with(AudioCue::tick);
    }

    pub fn play_win(&self) {
        self.play_with(|| AudioCue::win(&mut rand::thread_rng()));
    }

    pub fn play_lose(&self) {
        self.play_with(AudioCue::lose);
    }

    pub fn play_spin_start(&self) {
        self.play_with(AudioCue::spin_start);
    }

    pub fn play_settle(&self) {
        self.play_with(AudioCue::settle);
    }

    fn play_with(&self, build: impl FnOnce() -> AudioCue) {
        if !self.enabled.get() {
            return;
        }
        if let Some(Some(backend)) = self.backend.get() {
            backend.play(&build());
        }
    }
}
