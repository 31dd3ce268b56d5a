//! Supported locale set, locale configuration and the resolved-locale newtype.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Locales served when no configuration overrides them.
pub const DEFAULT_SUPPORTED: &[&str] = &["en", "zh"];

/// Locale used when the requested one is not supported.
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleConfigError {
    #[error("supported locale set must not be empty")]
    Empty,

    #[error("duplicate locale '{0}' in supported set")]
    Duplicate(String),

    #[error("invalid locale code '{0}' (expected ASCII letters, digits or '-')")]
    InvalidCode(String),

    #[error("default locale '{0}' is not in the supported set")]
    DefaultNotSupported(String),
}

/// A locale that is guaranteed to be a member of the set it came from.
///
/// Only `SupportedLocales` hands these out, so holding one means the code
/// has already passed the membership check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLocale(Arc<str>);

impl ResolvedLocale {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ResolvedLocale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable, ordered, non-empty set of locale codes without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales {
    codes: Arc<[Arc<str>]>,
}

impl SupportedLocales {
    pub fn new<I, S>(codes: I) -> Result<Self, LocaleConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collected: Vec<Arc<str>> = Vec::new();
        for code in codes {
            let code = code.as_ref();
            if !is_valid_code(code) {
                return Err(LocaleConfigError::InvalidCode(code.to_string()));
            }
            if collected.iter().any(|c| c.as_ref() == code) {
                return Err(LocaleConfigError::Duplicate(code.to_string()));
            }
            collected.push(Arc::from(code));
        }

        if collected.is_empty() {
            return Err(LocaleConfigError::Empty);
        }

        Ok(SupportedLocales {
            codes: collected.into(),
        })
    }

    /// Exact membership test. Codes are opaque: no case folding, no prefixes.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c.as_ref() == code)
    }

    pub fn get(&self, code: &str) -> Option<ResolvedLocale> {
        self.codes
            .iter()
            .find(|c| c.as_ref() == code)
            .map(|c| ResolvedLocale(Arc::clone(c)))
    }

    /// Every member, in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = ResolvedLocale> + '_ {
        self.codes.iter().map(|c| ResolvedLocale(Arc::clone(c)))
    }
}

/// The supported set together with its default member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    supported: SupportedLocales,
    default_locale: ResolvedLocale,
}

impl LocaleConfig {
    pub fn new(supported: SupportedLocales, default_locale: &str) -> Result<Self, LocaleConfigError> {
        let default_locale = supported
            .get(default_locale)
            .ok_or_else(|| LocaleConfigError::DefaultNotSupported(default_locale.to_string()))?;

        Ok(LocaleConfig {
            supported,
            default_locale,
        })
    }

    pub fn supported(&self) -> &SupportedLocales {
        &self.supported
    }

    pub fn default_locale(&self) -> &ResolvedLocale {
        &self.default_locale
    }
}

// Codes end up in file names and URL segments.
fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
