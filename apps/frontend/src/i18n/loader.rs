//! Bundle loaders — pluggable, trait-based source of message bundles.
//!
//! `FsBundleLoader` reads `<dir>/<locale>.json` per request.
//! `StaticBundleLoader` serves bundles parsed once at startup (the built-in
//! messages by default).
//!
//! `AppState` holds an `Arc<dyn BundleLoader>`, chosen at startup via config.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::error;

use crate::i18n::bundle::{parse_messages, BundleError, MessageBundle};
use crate::locale::ResolvedLocale;

/// Produces the bundle for an already resolved locale. Resolution happens
/// first; loaders never see unsupported codes.
#[async_trait]
pub trait BundleLoader: Send + Sync {
    async fn load(&self, locale: &ResolvedLocale) -> Result<MessageBundle, BundleError>;
}

const BUILTIN_MESSAGES: &[(&str, &str)] = &[
    ("en", include_str!("../../messages/en.json")),
    ("zh", include_str!("../../messages/zh.json")),
];

// ────────────────────────────────────────────────────────────────────────────
// FsBundleLoader
// ────────────────────────────────────────────────────────────────────────────

pub struct FsBundleLoader {
    dir: PathBuf,
}

impl FsBundleLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsBundleLoader { dir: dir.into() }
    }
}

#[async_trait]
impl BundleLoader for FsBundleLoader {
    async fn load(&self, locale: &ResolvedLocale) -> Result<MessageBundle, BundleError> {
        let path = self.dir.join(format!("{locale}.json"));

        let result = match tokio::fs::read_to_string(&path).await {
            Ok(json) => MessageBundle::from_json(locale.clone(), &json),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BundleError::NotFound {
                locale: locale.to_string(),
            }),
            Err(source) => Err(BundleError::Io {
                locale: locale.to_string(),
                source,
            }),
        };

        if let Err(e) = &result {
            error!(
                timestamp = %Utc::now().to_rfc3339(),
                path = %path.display(),
                "Error loading messages: {e}"
            );
        }
        result
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StaticBundleLoader
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct StaticBundleLoader {
    bundles: HashMap<String, Arc<HashMap<String, String>>>,
}

impl StaticBundleLoader {
    /// Messages compiled into the binary.
    pub fn builtin() -> Result<Self, BundleError> {
        Self::from_sources(BUILTIN_MESSAGES.iter().copied())
    }

    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, BundleError> {
        let mut bundles = HashMap::new();
        for (locale, json) in sources {
            bundles.insert(locale.to_string(), Arc::new(parse_messages(locale, json)?));
        }
        Ok(StaticBundleLoader { bundles })
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }
}

#[async_trait]
impl BundleLoader for StaticBundleLoader {
    async fn load(&self, locale: &ResolvedLocale) -> Result<MessageBundle, BundleError> {
        self.bundles
            .get(locale.as_str())
            .map(|messages| MessageBundle::new(locale.clone(), Arc::clone(messages)))
            .ok_or_else(|| {
                error!(timestamp = %Utc::now().to_rfc3339(), %locale, "No built-in messages");
                BundleError::NotFound {
                    locale: locale.to_string(),
                }
            })
    }
}
