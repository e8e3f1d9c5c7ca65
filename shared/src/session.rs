use std::cell::RefCell;
use std::rc::Rc;

use crate::prize::{Outcome, PrizeList};
use crate::sound::{SoundEngine, SynthBackend, Ticker, TICK_START_DELAY_MS};
use crate::spin::{IndexPicker, SpinController, SpinEnded, SpinRequest, SpinSettings, WheelState};
use crate::timeline::{Scheduler, SpinTimeline};

type ResultListener = Rc<dyn Fn(SpinEnded, Outcome)>;

/// One wheel on the page: spin timeline, tick chain and sound cues wired together.
pub struct WheelSession<S: Scheduler, B: SynthBackend + 'static> {
    prizes: Rc<PrizeList>,
    settings: SpinSettings,
    timeline: SpinTimeline<S>,
    ticker: Ticker<S>,
    sound: Rc<SoundEngine<B>>,
    listener: Rc<RefCell<Option<ResultListener>>>,
}

impl<S: Scheduler, B: SynthBackend + 'static> WheelSession<S, B> {
    pub fn new(
        prizes: PrizeList,
        settings: SpinSettings,
        picker: Box<dyn IndexPicker>,
        scheduler: S,
        sound: Rc<SoundEngine<B>>,
    ) -> Self {
        let prizes = Rc::new(prizes);
        let controller = SpinController::new(prizes.len(), settings, picker);
        let timeline = SpinTimeline::new(controller, scheduler.clone());
        let ticker = Ticker::new(scheduler);
        let listener: Rc<RefCell<Option<ResultListener>>> = Rc::new(RefCell::new(None));

        {
            let sound = sound.clone();
            ticker.on_tick(move || sound.play_tick());
        }
        {
            let prizes = prizes.clone();
            let ticker = ticker.clone();
            let sound = sound.clone();
            let listener = listener.clone();
            timeline.on_spin_end(move |ended| {
                ticker.cancel();
                let Some(outcome) = prizes.outcome(ended.selected_index) else {
                    log::warn!("spin reported unknown index {}", ended.selected_index);
                    return;
                };
                sound.play_settle();
                if outcome.is_win() {
                    sound.play_win();
                } else {
                    sound.play_lose();
                }
                log::info!(
                    "wheel stopped on {} ({})",
                    outcome.prize().label,
                    if ended.early_stopped { "early stop" } else { "full spin" }
                );

                let shell = listener.borrow().clone();
                if let Some(shell) = shell {
                    shell(ended, outcome);
                }
            });
        }

        Self {
            prizes,
            settings,
            timeline,
            ticker,
            sound,
            listener,
        }
    }

    pub fn on_spin_end(&self, listener: impl Fn(SpinEnded, Outcome) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn start(&self) -> Option<SpinRequest> {
        if self.timeline.is_spinning() {
            return None;
        }
        self.sound.play_click();
        let request = self.timeline.start()?;
        self.sound.play_spin_start();
        self.ticker.start(request.duration_ms, TICK_START_DELAY_MS);
        Some(request)
    }

    pub fn stop_now(&self) -> Option<SpinRequest> {
        let request = self.timeline.stop_now()?;
        self.sound.play_click();
        self.ticker.start(request.duration_ms, 0);
        Some(request)
    }

    pub fn set_sound_enabled(&self, enabled: bool) {
        self.sound.set_enabled(enabled);
        if enabled {
            self.sound.play_click();
        }
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound.is_enabled()
    }

    pub fn displayed_angle(&self) -> f64 {
        self.timeline.displayed_angle()
    }

    pub fn is_spinning(&self) -> bool {
        self.timeline.is_spinning()
    }

    pub fn state(&self) -> WheelState {
        self.timeline.state()
    }

    pub fn prizes(&self) -> &PrizeList {
        &self.prizes
    }

    pub fn settings(&self) -> &SpinSettings {
        &self.settings
    }

    pub fn sound(&self) -> &SoundEngine<B> {
        &self.sound
    }

    /// Cancels every pending timer. Safe to call more than once.
    pub fn teardown(&self) {
        self.timeline.teardown();
        self.ticker.cancel();
    }
}

impl<S: Scheduler, B: SynthBackend + 'static> Drop for WheelSession<S, B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::CueKind;
    use crate::testing::{ManualScheduler, RecordingBackend, ScriptedPicker};

    type Events = Rc<RefCell<Vec<(f64, SpinEnded, Outcome)>>>;

    fn session(
        indices: Vec<usize>,
        sound_enabled: bool,
    ) -> (WheelSession<ManualScheduler, RecordingBackend>, ManualScheduler, RecordingBackend, Events) {
        let scheduler = ManualScheduler::default();
        let backend = RecordingBackend::default();
        let factory = backend.clone();
        let sound = Rc::new(SoundEngine::new(move || Some(factory.clone()), sound_enabled));
        let session = WheelSession::new(
            PrizeList::default(),
            SpinSettings::default(),
            Box::new(ScriptedPicker::new(indices, 5)),
            scheduler.clone(),
            sound,
        );
        let events: Events = Rc::new(RefCell::new(Vec::new()));
        {
            let events = events.clone();
            let clock = scheduler.clone();
            session.on_spin_end(move |ended, outcome| {
                events.borrow_mut().push((clock.now_ms(), ended, outcome))
            });
        }
        (session, scheduler, backend, events)
    }

    #[test]
    fn test_full_spin_reports_win() {
        let (session, scheduler, backend, events) = session(vec![7], true);
        session.start().unwrap();
        scheduler.advance(5000.0);

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, 5000.0);
        assert_eq!(events[0].1, SpinEnded { selected_index: 7, early_stopped: false });
        assert!(events[0].2.is_win());
        assert_eq!(events[0].2.prize().label, "白酒+阿五集装箱+信阳菜");

        assert_eq!(backend.count(CueKind::Click), 1);
        assert_eq!(backend.count(CueKind::SpinStart), 1);
        assert!(backend.count(CueKind::Tick) > 10);
        assert_eq!(backend.count(CueKind::Settle), 1);
        assert_eq!(backend.count(CueKind::Win), 1);
        assert_eq!(backend.count(CueKind::Lose), 0);
        // Settle comes before the result fanfare and nothing ticks afterwards
        assert_eq!(&backend.played()[backend.played().len() - 2..], &[CueKind::Settle, CueKind::Win]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_sentinel_reports_no_win() {
        let (session, scheduler, backend, events) = session(vec![15], true);
        session.start().unwrap();
        scheduler.advance(5000.0);
        assert!(!events.borrow()[0].2.is_win());
        assert_eq!(backend.count(CueKind::Lose), 1);
        assert_eq!(backend.count(CueKind::Win), 0);
    }

    #[test]
    fn test_immediate_stop_reports_once() {
        let (session, scheduler, _backend, events) = session(vec![7, 2], true);
        session.start().unwrap();
        session.stop_now().unwrap();
        assert!(session.stop_now().is_none());

        scheduler.advance(1500.0);
        assert_eq!(events.borrow().len(), 1);
        assert!(events.borrow()[0].0 <= 1500.0);
        assert_eq!(events.borrow()[0].1, SpinEnded { selected_index: 2, early_stopped: true });

        scheduler.advance(5000.0);
        assert_eq!(events.borrow().len(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_start_ignored_while_spinning() {
        let (session, scheduler, backend, _events) = session(vec![1, 2], true);
        let first = session.start().unwrap();
        scheduler.advance(100.0);
        assert!(session.start().is_none());
        assert_eq!(backend.count(CueKind::Click), 1);
        assert_eq!(session.state().current_angle_degrees, first.target_angle);
    }

    #[test]
    fn test_disabled_sound_stays_silent() {
        let (session, scheduler, backend, events) = session(vec![3], false);
        session.start().unwrap();
        scheduler.advance(6000.0);
        assert_eq!(events.borrow().len(), 1);
        assert!(backend.played().is_empty());

        session.set_sound_enabled(true);
        assert!(session.sound_enabled());
        assert_eq!(backend.played(), vec![CueKind::Click]);
    }

    #[test]
    fn test_drop_cancels_timers() {
        let (session, scheduler, _backend, events) = session(vec![3], true);
        session.start().unwrap();
        scheduler.advance(300.0);
        drop(session);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(6000.0);
        assert!(events.borrow().is_empty());
    }
}
