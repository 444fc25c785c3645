use std::fmt;

/// Default delay before a notification hides itself
pub const AUTO_HIDE_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert--success",
            Severity::Warning => "alert--warning",
            Severity::Danger => "alert--danger",
        }
    }
}

/// Monotonic identifier of a raised notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// Alert banner state.
///
/// A delayed hide only applies to the notification it was scheduled for:
/// `expire` with a superseded id is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    current: Option<Notification>,
    visible: bool,
    next_id: u64,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content, show the banner and return the id the auto-hide
    /// timer must carry.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.current = Some(Notification {
            id,
            message: message.into(),
            severity,
        });
        self.visible = true;
        id
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Timer expiry for `id`. Returns `true` if the banner was hidden.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        let is_current = self.current.as_ref().map(|n| n.id) == Some(id);
        if is_current && self.visible {
            self.visible = false;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The notification on screen, if any
    pub fn visible_notification(&self) -> Option<&Notification> {
        if self.visible {
            self.current.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Timers fired in order of their deadline against a simulated clock.
    struct Clock {
        now_ms: u64,
        pending: Vec<(u64, NotificationId)>,
    }

    impl Clock {
        fn new() -> Self {
            Self {
                now_ms: 0,
                pending: Vec::new(),
            }
        }

        fn notify(&mut self, banner: &mut Banner, msg: &str, severity: Severity) {
            let id = banner.notify(msg, severity);
            self.pending.push((self.now_ms + AUTO_HIDE_MS as u64, id));
        }

        fn advance_to(&mut self, banner: &mut Banner, t_ms: u64) {
            self.pending.sort_by_key(|(deadline, _)| *deadline);
            let (due, rest): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(deadline, _)| *deadline <= t_ms);
            for (_, id) in due {
                banner.expire(id);
            }
            self.pending = rest;
            self.now_ms = t_ms;
        }
    }

    #[test]
    fn test_notify_shows_banner() {
        let mut banner = Banner::new();
        assert!(!banner.is_visible());

        banner.notify("saved", Severity::Success);
        let shown = banner.visible_notification().unwrap();
        assert_eq!(shown.message, "saved");
        assert_eq!(shown.severity, Severity::Success);
    }

    #[test]
    fn test_expire_hides_after_delay() {
        let mut banner = Banner::new();
        let mut clock = Clock::new();

        clock.notify(&mut banner, "A", Severity::Warning);
        clock.advance_to(&mut banner, 4999);
        assert!(banner.is_visible());
        clock.advance_to(&mut banner, 5000);
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_notification() {
        let mut banner = Banner::new();
        let mut clock = Clock::new();

        clock.notify(&mut banner, "A", Severity::Warning);
        clock.advance_to(&mut banner, 1000);
        clock.notify(&mut banner, "B", Severity::Danger);

        clock.advance_to(&mut banner, 5500);
        let shown = banner.visible_notification().expect("B must still be visible");
        assert_eq!(shown.message, "B");
        assert_eq!(shown.severity, Severity::Danger);

        clock.advance_to(&mut banner, 6000);
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_dismiss_is_immediate_and_timer_is_then_noop() {
        let mut banner = Banner::new();
        let id = banner.notify("A", Severity::Success);
        banner.dismiss();
        assert!(!banner.is_visible());
        assert!(!banner.expire(id));
    }

    #[test]
    fn test_notify_after_dismiss_shows_again() {
        let mut banner = Banner::new();
        let first = banner.notify("A", Severity::Success);
        banner.dismiss();
        let second = banner.notify("B", Severity::Warning);
        assert!(second > first);
        assert!(!banner.expire(first));
        assert_eq!(banner.visible_notification().unwrap().message, "B");
        assert!(banner.expire(second));
    }
}
