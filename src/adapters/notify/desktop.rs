//! Desktop notifications via notify-rust (D-Bus).
//!
//! Progress notices keep their notification handle so the same bubble is
//! updated in place and closed on `hide`. When the notification daemon cannot
//! be reached the message goes to the console instead.

use crate::adapters::notify::ConsoleNotifier;
use crate::ports::notifier::{Notifier, ProgressNotice};
use notify_rust::{Notification, NotificationHandle, Timeout};
use std::sync::Mutex;

pub const APP_NAME: &str = "AI Insight";

/// Lifetime of a transient notice
const NOTICE_TIMEOUT_MS: u32 = 5000;

pub struct DesktopNotifier {
    fallback: ConsoleNotifier,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self {
            fallback: ConsoleNotifier::new(true),
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

fn notification(message: &str, timeout: Timeout) -> Notification {
    let mut notification = Notification::new();
    notification
        .appname(APP_NAME)
        .summary(APP_NAME)
        .body(message)
        .timeout(timeout);
    notification
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str) {
        log::debug!("Notification: {message}");

        let transient = notification(message, Timeout::Milliseconds(NOTICE_TIMEOUT_MS));
        if let Err(e) = transient.show() {
            log::warn!("Failed to show notification: {e}");
            self.fallback.notify(message);
        }
    }

    fn progress(&self, message: &str) -> Box<dyn ProgressNotice> {
        log::debug!("Progress: {message}");

        match notification(message, Timeout::Never).show() {
            Ok(handle) => Box::new(DesktopNotice {
                handle: Mutex::new(Some(handle)),
            }),
            Err(e) => {
                log::warn!("Failed to show notification: {e}");
                self.fallback.progress(message)
            }
        }
    }
}

/// Persistent notification; `None` once closed
struct DesktopNotice {
    handle: Mutex<Option<NotificationHandle>>,
}

impl ProgressNotice for DesktopNotice {
    fn set_message(&self, message: &str) {
        log::debug!("Progress: {message}");
        if let Ok(mut guard) = self.handle.lock() {
            if let Some(handle) = guard.as_mut() {
                handle.body(message);
                handle.update();
            }
        }
    }

    fn hide(&self) {
        let handle = self.handle.lock().ok().and_then(|mut guard| guard.take());
        if let Some(handle) = handle {
            handle.close();
            log::debug!("Progress notification closed");
        }
    }
}
