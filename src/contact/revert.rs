use std::time::Duration;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use super::ContactForm;

/// Deferred one-shot execution, so the reset timer can run on the browser's
/// `setTimeout` or on a fake in tests.
pub trait RevertScheduler: Clone + Send + Sync + 'static {
    type Handle: Send + Sync + 'static;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// Schedules tasks with `set_timeout_with_handle`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl RevertScheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(task, delay)
            .map_err(|e| log::warn!("couldn't set timeout: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Brings a submitted form back to idle once the success window is over.
///
/// Must be created inside the reactive owner of the form. When that owner is
/// cleaned up the pending timer is cancelled, and a timer that still fires
/// afterwards finds the signals disposed and does nothing.
pub struct RevertTimer<S: RevertScheduler> {
    form: RwSignal<ContactForm>,
    pending: StoredValue<Option<S::Handle>>,
    scheduler: S,
    clock: fn() -> DateTime<Utc>,
}

impl<S: RevertScheduler> Clone for RevertTimer<S> {
    fn clone(&self) -> Self {
        Self {
            form: self.form,
            pending: self.pending,
            scheduler: self.scheduler.clone(),
            clock: self.clock,
        }
    }
}

impl<S: RevertScheduler + Copy> Copy for RevertTimer<S> {}

impl<S: RevertScheduler> RevertTimer<S> {
    pub fn new(form: RwSignal<ContactForm>, scheduler: S, clock: fn() -> DateTime<Utc>) -> Self {
        let timer = Self {
            form,
            pending: StoredValue::new(None),
            scheduler,
            clock,
        };
        let on_teardown = timer.clone();
        on_cleanup(move || on_teardown.cancel());
        timer
    }

    /// Runs the reset check after `delay`, replacing any earlier pending one.
    pub fn schedule(&self, delay: Duration) {
        self.cancel();
        let timer = self.clone();
        match self.scheduler.schedule(delay, Box::new(move || timer.fire())) {
            Some(handle) => {
                self.pending.try_update_value(|pending| *pending = Some(handle));
            }
            None => log::warn!("contact form reset not scheduled"),
        }
    }

    pub fn cancel(&self) {
        if let Some(Some(handle)) = self.pending.try_update_value(Option::take) {
            self.scheduler.cancel(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .try_with_value(Option::is_some)
            .unwrap_or(false)
    }

    fn fire(&self) {
        self.pending.try_update_value(|pending| *pending = None);
        let left = self
            .form
            .try_update(|f| f.poll_revert((self.clock)()))
            .flatten();
        if let Some(left) = left {
            self.schedule(left);
        }
    }
}
