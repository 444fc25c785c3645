//! Transient alert banner
//!
//! - banner.rs: identifier-guarded Hidden/Visible state machine
//! - view.rs: AlertBanner component

mod banner;
mod view;

pub use banner::{Banner, Notification, NotificationId, Severity, AUTO_HIDE_MS};
pub use view::AlertBanner;
