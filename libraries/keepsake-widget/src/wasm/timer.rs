//! `setInterval`-backed scheduler

use keepsake_core::{IntervalScheduler, TimerId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

type Sink = Rc<dyn Fn(TimerId)>;

struct ActiveInterval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

struct Timers {
    window: Window,
    next_id: u64,
    active: HashMap<TimerId, ActiveInterval>,
    sink: Option<Sink>,
}

impl Drop for Timers {
    fn drop(&mut self) {
        for (_, interval) in self.active.drain() {
            self.window.clear_interval_with_handle(interval.handle);
        }
    }
}

/// [`IntervalScheduler`] over `window.setInterval`
///
/// Firings are delivered to the callback installed with
/// [`on_fire`](Self::on_fire). Clones share the same set of timers.
#[derive(Clone)]
pub struct WindowScheduler {
    timers: Rc<RefCell<Timers>>,
}

impl WindowScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            timers: Rc::new(RefCell::new(Timers {
                window,
                next_id: 1,
                active: HashMap::new(),
                sink: None,
            })),
        }
    }

    /// Route every firing to `sink`
    pub fn on_fire(&self, sink: impl Fn(TimerId) + 'static) {
        self.timers.borrow_mut().sink = Some(Rc::new(sink));
    }

    fn fire(timers: &Weak<RefCell<Timers>>, id: TimerId) {
        let Some(timers) = timers.upgrade() else {
            return;
        };
        // Release the borrow before the sink runs; it may set or clear timers
        let sink = timers.borrow().sink.clone();
        if let Some(sink) = sink {
            sink(id);
        }
    }
}

impl IntervalScheduler for WindowScheduler {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        let mut timers = self.timers.borrow_mut();
        let id = TimerId::new(timers.next_id);
        timers.next_id += 1;

        let weak = Rc::downgrade(&self.timers);
        let callback =
            Closure::wrap(Box::new(move || Self::fire(&weak, id)) as Box<dyn FnMut()>);
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);

        match timers
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => {
                timers.active.insert(
                    id,
                    ActiveInterval {
                        handle,
                        _callback: callback,
                    },
                );
            }
            Err(err) => tracing::warn!(error = ?err, "setInterval failed; autoplay will not tick"),
        }

        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        let mut timers = self.timers.borrow_mut();
        if let Some(interval) = timers.active.remove(&id) {
            timers.window.clear_interval_with_handle(interval.handle);
        }
    }
}
