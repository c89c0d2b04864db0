//! Terminal notifications on stderr, used when desktop notifications are
//! turned off or the notification daemon is unreachable.

use crate::ports::notifier::{Notifier, ProgressNotice};
use std::sync::atomic::{AtomicBool, Ordering};

pub struct ConsoleNotifier {
    enabled: bool,
}

impl ConsoleNotifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        log::debug!("Notice: {message}");
        if self.enabled {
            eprintln!("{message}");
        }
    }

    fn progress(&self, message: &str) -> Box<dyn ProgressNotice> {
        let notice = ConsoleNotice {
            enabled: self.enabled,
            hidden: AtomicBool::new(false),
        };
        notice.set_message(message);
        Box::new(notice)
    }
}

/// Progress line; updates after `hide` are dropped
struct ConsoleNotice {
    enabled: bool,
    hidden: AtomicBool,
}

impl ProgressNotice for ConsoleNotice {
    fn set_message(&self, message: &str) {
        if self.hidden.load(Ordering::SeqCst) {
            return;
        }
        log::debug!("Progress: {message}");
        if self.enabled {
            eprintln!("{message}");
        }
    }

    fn hide(&self) {
        self.hidden.store(true, Ordering::SeqCst);
        log::debug!("Progress notice dismissed");
    }
}
