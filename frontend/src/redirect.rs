use common::auth::{Redirect, RedirectScheduler, ScheduledTask};
use gloo::timers::callback::Timeout;
use gloo::utils::window;
use log::{error, info};

/// Schedules full-page navigations with a browser timeout.

pub struct BrowserRedirect;

pub struct BrowserTask(Timeout);

impl BrowserTask {

    /// Let the timeout fire even after the task is dropped.

    pub fn forget(self) {
        let _ = self.0.forget();
    }
}

impl ScheduledTask for BrowserTask {
    fn cancel(self) {
        let _ = self.0.cancel();
    }
}

impl RedirectScheduler for BrowserRedirect {
    type Task = BrowserTask;

    fn schedule(&mut self, redirect: Redirect) -> BrowserTask {
        let millis = u32::try_from(redirect.delay.as_millis()).unwrap_or(u32::MAX);
        let target = redirect.target;
        BrowserTask(Timeout::new(millis, move || {
            info!("redirecting to {}", target);
            if let Err(err) = window().location().set_href(&target) {
                error!("couldn't redirect to {}: {:?}", target, err);
            }
        }))
    }
}
