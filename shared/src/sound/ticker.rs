use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::easing::ease_out_cubic;
use crate::timeline::Scheduler;

pub const TICK_START_DELAY_MS: u32 = 200; // Lets the start sweep play first
pub const TICK_MIN_INTERVAL_MS: f64 = 30.0;
pub const TICK_INTERVAL_RANGE_MS: f64 = 400.0;

/// Decelerating tick cadence for one spin leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSchedule {
    duration_ms: f64,
    elapsed_ms: f64,
    interval_ms: f64,
}

impl TickSchedule {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: duration_ms as f64,
            elapsed_ms: 0.0,
            interval_ms: TICK_MIN_INTERVAL_MS,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Accounts for a tick about to play and returns the delay before the next one.
    /// `None` once the cadence has covered the whole leg; no tick should play then.
    pub fn advance(&mut self) -> Option<f64> {
        if self.is_finished() {
            return None;
        }
        self.elapsed_ms += self.interval_ms;
        let progress = if self.duration_ms > 0.0 {
            self.elapsed_ms / self.duration_ms
        } else {
            1.0
        };
        self.interval_ms = TICK_MIN_INTERVAL_MS + ease_out_cubic(progress) * TICK_INTERVAL_RANGE_MS;
        Some(self.interval_ms)
    }
}

type TickListener = Rc<dyn Fn()>;

struct TickerInner<S: Scheduler> {
    scheduler: S,
    generation: Cell<u64>,
    pending: RefCell<Option<S::Handle>>,
    listener: RefCell<Option<TickListener>>,
}

/// Self-rescheduling tick chain. Restarting or cancelling retires the previous chain.
pub struct Ticker<S: Scheduler> {
    inner: Rc<TickerInner<S>>,
}

impl<S: Scheduler> Clone for Ticker<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Scheduler> Ticker<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            inner: Rc::new(TickerInner {
                scheduler,
                generation: Cell::new(0),
                pending: RefCell::new(None),
                listener: RefCell::new(None),
            }),
        }
    }

    pub fn on_tick(&self, listener: impl Fn() + 'static) {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn start(&self, duration_ms: u32, start_delay_ms: u32) {
        self.cancel();
        let generation = self.inner.generation.get();
        TickerInner::schedule(&self.inner, generation, TickSchedule::new(duration_ms), start_delay_ms);
    }

    pub fn cancel(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        let pending = self.inner.pending.borrow_mut().take();
        if let Some(handle) = pending {
            self.inner.scheduler.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}

impl<S: Scheduler> TickerInner<S> {
    fn schedule(inner: &Rc<Self>, generation: u64, schedule: TickSchedule, delay_ms: u32) {
        let weak: Weak<Self> = Rc::downgrade(inner);
        let handle = inner.scheduler.schedule(
            delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    TickerInner::fire(&inner, generation, schedule);
                }
            }),
        );
        *inner.pending.borrow_mut() = Some(handle);
    }

    fn fire(inner: &Rc<Self>, generation: u64, mut schedule: TickSchedule) {
        if generation != inner.generation.get() {
            return;
        }
        let Some(next_delay) = schedule.advance() else {
            inner.pending.borrow_mut().take();
            return;
        };

        let listener = inner.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
        // The listener may have cancelled us
        if generation != inner.generation.get() {
            return;
        }
        TickerInner::schedule(inner, generation, schedule, next_delay.round() as u32);
    }
}

impl<S: Scheduler> Drop for TickerInner<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            self.scheduler.cancel(handle);
        }
    }
}
