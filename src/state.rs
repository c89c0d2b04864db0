/// Application state shared by the commands
///
/// Holds the host ports and the provider factory. Settings are not part of the
/// state; each command receives them explicitly.
use crate::ports::{Notifier, ProviderFactory, Vault};
use std::sync::Arc;

pub struct AppState {
    pub vault: Arc<dyn Vault>,
    pub notifier: Arc<dyn Notifier>,
    pub providers: Arc<dyn ProviderFactory>,
}

impl AppState {
    pub fn new(
        vault: Arc<dyn Vault>,
        notifier: Arc<dyn Notifier>,
        providers: Arc<dyn ProviderFactory>,
    ) -> Self {
        Self {
            vault,
            notifier,
            providers,
        }
    }
}
