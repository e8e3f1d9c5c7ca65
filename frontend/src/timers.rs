use gloo_timers::callback::Timeout;
use shared::timeline::Scheduler;

/// Wall-clock scheduler backed by `setTimeout`. Dropping a handle clears its timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle);
    }
}
