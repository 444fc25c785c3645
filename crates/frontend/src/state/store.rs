use leptos::prelude::*;

use super::SessionState;
use crate::shared::config::config;
use crate::shared::notification::{NotificationId, Severity};

/// Access to the session state from async handlers.
///
/// `apply` returns `None` once the underlying store is gone (the owning
/// component was disposed while a request was in flight).
pub trait SessionStore<H> {
    fn apply<R>(&self, f: impl FnOnce(&mut SessionState<H>) -> R) -> Option<R>;

    /// Arrange for `expire(id)` to run after the auto-hide delay.
    fn schedule_auto_hide(&self, id: NotificationId);

    fn notify(&self, message: impl Into<String>, severity: Severity) -> Option<NotificationId> {
        let message = message.into();
        let id = self.apply(move |s| s.banner.notify(message, severity))?;
        self.schedule_auto_hide(id);
        Some(id)
    }
}

impl<H: 'static> SessionStore<H> for RwSignal<SessionState<H>, LocalStorage> {
    fn apply<R>(&self, f: impl FnOnce(&mut SessionState<H>) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn schedule_auto_hide(&self, id: NotificationId) {
        let store = *self;
        let delay = config().notifications.auto_hide_ms;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            if store.try_update(|s| s.banner.expire(id)) == Some(true) {
                log::debug!("Notification {} auto-hidden", id);
            }
        });
    }
}

impl<H, T: SessionStore<H> + ?Sized> SessionStore<H> for &T {
    fn apply<R>(&self, f: impl FnOnce(&mut SessionState<H>) -> R) -> Option<R> {
        (**self).apply(f)
    }

    fn schedule_auto_hide(&self, id: NotificationId) {
        (**self).schedule_auto_hide(id)
    }
}
