use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::easing::ease_out_quart;
use crate::spin::{SpinController, SpinEnded, SpinKind, SpinRequest, WheelState};

/// Timer seam between the wheel logic and whatever clock drives it.
///
/// Implementations run tasks on the single UI thread; a cancelled handle must
/// never run its task.
pub trait Scheduler: Clone + 'static {
    type Handle;

    fn now_ms(&self) -> f64;
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// Interpolation of one motion leg, sampled by the animation-frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: f64,
    pub to: f64,
    pub started_at: f64,
    pub duration_ms: f64,
}

impl Motion {
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn angle_at(&self, now: f64) -> f64 {
        self.from + (self.to - self.from) * ease_out_quart(self.progress(now))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

type SpinListener = Rc<dyn Fn(SpinEnded)>;

struct TimelineInner<S: Scheduler> {
    controller: RefCell<SpinController>,
    scheduler: S,
    completion: RefCell<Option<S::Handle>>,
    motion: Cell<Option<Motion>>,
    listener: RefCell<Option<SpinListener>>,
}

/// Drives a [`SpinController`] in time: one completion notifier per motion leg,
/// plus the eased angle the renderer should display right now.
pub struct SpinTimeline<S: Scheduler> {
    inner: Rc<TimelineInner<S>>,
}

impl<S: Scheduler> SpinTimeline<S> {
    pub fn new(controller: SpinController, scheduler: S) -> Self {
        Self {
            inner: Rc::new(TimelineInner {
                controller: RefCell::new(controller),
                scheduler,
                completion: RefCell::new(None),
                motion: Cell::new(None),
                listener: RefCell::new(None),
            }),
        }
    }

    pub fn on_spin_end(&self, listener: impl Fn(SpinEnded) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn start(&self) -> Option<SpinRequest> {
        let request = self.inner.controller.borrow_mut().start_spin()?;
        self.inner.cancel_completion();
        self.inner.begin_leg(&request, request.start_angle);
        TimelineInner::schedule_completion(&self.inner, &request);
        Some(request)
    }

    pub fn stop_now(&self) -> Option<SpinRequest> {
        let shown = self.displayed_angle();
        let request = self.inner.controller.borrow_mut().request_early_stop()?;
        // The full-length completion must be gone before the short one exists.
        self.inner.cancel_completion();
        self.inner.begin_leg(&request, shown);
        TimelineInner::schedule_completion(&self.inner, &request);
        Some(request)
    }

    /// Angle to render at this instant.
    pub fn displayed_angle(&self) -> f64 {
        match self.inner.motion.get() {
            Some(motion) => motion.angle_at(self.inner.scheduler.now_ms()),
            None => self.inner.controller.borrow().state().current_angle_degrees,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.inner.controller.borrow().is_spinning()
    }

    pub fn state(&self) -> WheelState {
        self.inner.controller.borrow().state().clone()
    }

    pub fn segments(&self) -> usize {
        self.inner.controller.borrow().segments()
    }

    /// Drops any pending completion. The wheel keeps its committed angle.
    pub fn teardown(&self) {
        self.inner.cancel_completion();
    }
}

impl<S: Scheduler> TimelineInner<S> {
    fn begin_leg(&self, request: &SpinRequest, from: f64) {
        self.motion.set(Some(Motion {
            from,
            to: request.target_angle,
            started_at: self.scheduler.now_ms(),
            duration_ms: request.duration_ms as f64,
        }));
    }

    fn schedule_completion(inner: &Rc<Self>, request: &SpinRequest) {
        let weak: Weak<Self> = Rc::downgrade(inner);
        let generation = request.generation;
        let early_stopped = request.kind == SpinKind::EarlyStop;
        let handle = inner.scheduler.schedule(
            request.duration_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.finish(generation, early_stopped);
                }
            }),
        );
        *inner.completion.borrow_mut() = Some(handle);
    }

    fn cancel_completion(&self) {
        let pending = self.completion.borrow_mut().take();
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
    }

    fn finish(&self, generation: u64, early_stopped: bool) {
        let selected = self.controller.borrow_mut().complete(generation);
        let Some(selected_index) = selected else {
            log::debug!("ignoring stale completion for spin {}", generation);
            return;
        };
        self.motion.set(None);

        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(SpinEnded {
                selected_index,
                early_stopped,
            });
        }
    }
}

impl<S: Scheduler> Drop for TimelineInner<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.completion.get_mut().take() {
            self.scheduler.cancel(handle);
        }
    }
}
