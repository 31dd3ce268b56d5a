//! Locale Resolver: picks the locale a request renders in.
//!
//! Fail-open: an unsupported or missing candidate never blocks rendering, it
//! degrades to the configured default and leaves a `warn` record behind.

use chrono::Utc;
use tracing::warn;

use crate::locale::supported::{LocaleConfig, ResolvedLocale};

/// Returns `candidate` when it is an exact member of the supported set,
/// otherwise the configured default.
pub fn resolve(candidate: Option<&str>, config: &LocaleConfig) -> ResolvedLocale {
    if let Some(resolved) = candidate.and_then(|c| config.supported().get(c)) {
        return resolved;
    }

    let fallback = config.default_locale().clone();
    warn!(
        timestamp = %Utc::now().to_rfc3339(),
        candidate = candidate.unwrap_or("<absent>"),
        default = %fallback,
        "Unsupported locale requested, falling back to default"
    );
    fallback
}
