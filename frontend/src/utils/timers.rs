//! Browser timers with drop-to-cancel handles.
//!
//! On `wasm32` these wrap `gloo_timers`; dropping or cancelling the handle
//! clears the pending `setTimeout`/`setInterval`. Host builds have no event
//! loop, so scheduling is a no-op and the callback never runs.

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::{Interval, Timeout};

#[cfg(target_arch = "wasm32")]
enum Scheduled {
    Once(Timeout),
    Repeating(Interval),
}

#[must_use = "the timer is cancelled when the handle is dropped"]
pub struct TimerHandle {
    label: &'static str,
    #[cfg(target_arch = "wasm32")]
    scheduled: Option<Scheduled>,
}

impl TimerHandle {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_active(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.scheduled.is_some()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    pub fn cancel(self) {
        log::debug!("Cancelling {} timer", self.label);
        #[cfg(target_arch = "wasm32")]
        match self.scheduled {
            Some(Scheduled::Once(timeout)) => timeout.cancel(),
            Some(Scheduled::Repeating(interval)) => interval.cancel(),
            None => {}
        };
    }
}

pub fn schedule_once<F>(label: &'static str, delay_ms: u32, callback: F) -> TimerHandle
where
    F: FnOnce() + 'static,
{
    log::debug!("Scheduling {label} timer in {delay_ms}ms");
    #[cfg(target_arch = "wasm32")]
    {
        TimerHandle {
            label,
            scheduled: Some(Scheduled::Once(Timeout::new(delay_ms, callback))),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        drop(callback);
        TimerHandle { label }
    }
}

pub fn schedule_repeating<F>(label: &'static str, period_ms: u32, callback: F) -> TimerHandle
where
    F: FnMut() + 'static,
{
    log::debug!("Scheduling {label} timer every {period_ms}ms");
    #[cfg(target_arch = "wasm32")]
    {
        TimerHandle {
            label,
            scheduled: Some(Scheduled::Repeating(Interval::new(period_ms, callback))),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        drop(callback);
        TimerHandle { label }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn once_timer_fires_after_delay() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = schedule_once("loading", 10, move || flag.set(true));
        assert!(handle.is_active());
        TimeoutFuture::new(50).await;
        assert!(fired.get());
    }

    #[wasm_bindgen_test]
    async fn cancelled_timers_do_not_fire() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let interval = schedule_repeating("refresh", 10, move || counter.set(counter.get() + 1));
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let timeout = schedule_once("loading", 10, move || flag.set(true));
        interval.cancel();
        drop(timeout);
        TimeoutFuture::new(50).await;
        assert_eq!(count.get(), 0);
        assert!(!fired.get());
    }
}
