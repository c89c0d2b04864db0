/// Notification port traits
///
/// Transient messages and a single updatable progress notice.
use std::time::Duration;

/// A notice whose message can be replaced while it is shown
pub trait ProgressNotice: Send + Sync {
    fn set_message(&self, message: &str);

    fn hide(&self);
}

/// Port trait for user-visible notifications
pub trait Notifier: Send + Sync {
    /// Show a message that disappears on its own
    fn notify(&self, message: &str);

    /// Show a notice that stays until hidden
    fn progress(&self, message: &str) -> Box<dyn ProgressNotice>;
}

/// Hide `notice` after `delay` without blocking the caller
pub fn dismiss_after(notice: Box<dyn ProgressNotice>, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        notice.hide();
    });
}
