//! Cloud storage adapters

pub mod google_drive;

pub use google_drive::GoogleDriveService;
