/// Adapters - concrete implementations of the ports
///
/// These modules implement the port traits for specific hosts and services.
pub mod notify;
pub mod services;
pub mod storage;
pub mod vault;
