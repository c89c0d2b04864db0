//! Vault adapters

pub mod fs;

pub use fs::FsVault;
