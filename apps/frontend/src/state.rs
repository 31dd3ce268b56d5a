use std::sync::Arc;

use crate::i18n::BundleLoader;
use crate::locale::LocaleConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup.
    pub locales: LocaleConfig,
    /// Pluggable bundle source. Default: built-in messages. Swap via MESSAGES_DIR.
    pub bundles: Arc<dyn BundleLoader>,
}
