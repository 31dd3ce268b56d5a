use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::locale::supported::{DEFAULT_LOCALE, DEFAULT_SUPPORTED};
use crate::locale::{LocaleConfig, SupportedLocales};

/// Application configuration loaded from environment variables.
/// Every variable is optional; the locale settings are validated at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub supported_locales: Vec<String>,
    pub default_locale: String,
    /// Directory of `<locale>.json` message files. Built-in messages when unset.
    pub messages_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            supported_locales: std::env::var("SUPPORTED_LOCALES")
                .map(|raw| parse_locale_list(&raw))
                .unwrap_or_else(|_| DEFAULT_SUPPORTED.iter().map(|s| s.to_string()).collect()),
            default_locale: std::env::var("DEFAULT_LOCALE")
                .unwrap_or_else(|_| DEFAULT_LOCALE.to_string()),
            messages_dir: std::env::var_os("MESSAGES_DIR").map(PathBuf::from),
        })
    }

    /// Validated, immutable locale configuration for the resolver.
    pub fn locale_config(&self) -> Result<LocaleConfig> {
        let supported = SupportedLocales::new(&self.supported_locales)
            .context("SUPPORTED_LOCALES is invalid")?;
        LocaleConfig::new(supported, &self.default_locale).context("DEFAULT_LOCALE is invalid")
    }
}

/// `"en, zh,,ja"` -> `["en", "zh", "ja"]`.
fn parse_locale_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(supported: &[&str], default_locale: &str) -> Config {
        Config {
            port: 3000,
            rust_log: "info".to_string(),
            supported_locales: supported.iter().map(|s| s.to_string()).collect(),
            default_locale: default_locale.to_string(),
            messages_dir: None,
        }
    }

    #[test]
    fn test_parse_locale_list_trims_and_skips_empty() {
        assert_eq!(parse_locale_list("en, zh,,ja "), vec!["en", "zh", "ja"]);
        assert!(parse_locale_list(" , ").is_empty());
    }

    #[test]
    fn test_locale_config_from_defaults() {
        let locales = config(DEFAULT_SUPPORTED, DEFAULT_LOCALE).locale_config().unwrap();
        assert_eq!(locales.default_locale().as_str(), "en");
        assert!(locales.supported().contains("zh"));
    }

    #[test]
    fn test_locale_config_rejects_bad_settings() {
        assert!(config(&[], "en").locale_config().is_err());
        assert!(config(&["en", "en"], "en").locale_config().is_err());
        assert!(config(&["en", "zh"], "fr").locale_config().is_err());
    }
}
