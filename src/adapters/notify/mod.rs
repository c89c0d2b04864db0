//! Notification adapters

pub mod console;
#[cfg(all(unix, not(target_os = "macos")))]
pub mod desktop;

pub use console::ConsoleNotifier;
#[cfg(all(unix, not(target_os = "macos")))]
pub use desktop::DesktopNotifier;
