// Application state module
// Immutable runtime state shared by every connection

use crate::assets::AssetRegistry;
use crate::config::Config;

/// Application state
///
/// Built once at startup and never mutated afterwards, so the serving path
/// needs no locks. The registry holds every bundled file's bytes.
pub struct AppState {
    pub config: Config,
    pub registry: AssetRegistry,
}

impl AppState {
    #[must_use]
    pub const fn new(config: Config, registry: AssetRegistry) -> Self {
        Self { config, registry }
    }
}
