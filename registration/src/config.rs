//! Configuration management for the registration demo.
//!
//! Loads configuration from environment variables with defaults matching the
//! live site.

use crate::catalog::{Catalog, CatalogError};
use crate::deep_link::{DeepLinkError, WhatsAppNumber};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default floating widget number
pub const DEFAULT_WHATSAPP_NUMBER: &str = "+27727389214";
/// Default partnership number
pub const DEFAULT_PARTNERSHIP_NUMBER: &str = "+27762073299";
/// Default registration processing delay
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 3000;
/// Default contact form send delay
pub const DEFAULT_CONTACT_DELAY_MS: u64 = 2000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target of the floating contact widget (`WHATSAPP_NUMBER`)
    pub whatsapp_number: String,
    /// Target of the partnership form (`PARTNERSHIP_WHATSAPP_NUMBER`)
    pub partnership_number: String,
    /// Simulated registration processing delay (`SUBMIT_DELAY_MS`)
    pub submit_delay_ms: u64,
    /// Simulated contact send delay (`CONTACT_DELAY_MS`)
    pub contact_delay_ms: u64,
    /// JSON catalog replacing the built-in one (`CATALOG_PATH`)
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unparseable numbers fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            whatsapp_number: lookup("WHATSAPP_NUMBER")
                .unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_string()),
            partnership_number: lookup("PARTNERSHIP_WHATSAPP_NUMBER")
                .unwrap_or_else(|| DEFAULT_PARTNERSHIP_NUMBER.to_string()),
            submit_delay_ms: lookup("SUBMIT_DELAY_MS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_SUBMIT_DELAY_MS),
            contact_delay_ms: lookup("CONTACT_DELAY_MS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_CONTACT_DELAY_MS),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Registration processing delay
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Contact form send delay
    #[must_use]
    pub const fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }

    /// The configured catalog, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if `catalog_path` is set and cannot be loaded.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading catalog");
                Catalog::from_path(path)
            },
            None => Ok(Catalog::church()),
        }
    }

    /// Parsed widget number
    ///
    /// # Errors
    ///
    /// Returns [`DeepLinkError`] if the configured number is malformed.
    pub fn whatsapp(&self) -> Result<WhatsAppNumber, DeepLinkError> {
        WhatsAppNumber::parse(&self.whatsapp_number)
    }

    /// Parsed partnership number
    ///
    /// # Errors
    ///
    /// Returns [`DeepLinkError`] if the configured number is malformed.
    pub fn partnership_whatsapp(&self) -> Result<WhatsAppNumber, DeepLinkError> {
        WhatsAppNumber::parse(&self.partnership_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.submit_delay(), Duration::from_secs(3));
        assert_eq!(config.contact_delay(), Duration::from_secs(2));
        assert_eq!(config.catalog_path, None);
        assert_eq!(
            config.whatsapp().map(|n| n.digits().to_string()),
            Ok("27727389214".to_string())
        );
        assert_eq!(
            config.partnership_whatsapp().map(|n| n.digits().to_string()),
            Ok("27762073299".to_string())
        );
    }

    #[test]
    fn test_overrides_and_fallbacks() {
        let config = Config::from_lookup(lookup(&[
            ("SUBMIT_DELAY_MS", "10"),
            ("CONTACT_DELAY_MS", "soon"),
            ("WHATSAPP_NUMBER", "+1 555 0100 200"),
            ("CATALOG_PATH", "  "),
        ]));
        assert_eq!(config.submit_delay(), Duration::from_millis(10));
        assert_eq!(config.contact_delay_ms, DEFAULT_CONTACT_DELAY_MS);
        assert_eq!(config.catalog_path, None);
        assert!(config.whatsapp().is_ok());
    }

    #[test]
    fn test_builtin_catalog_without_path() {
        let catalog = Config::default().catalog();
        assert!(matches!(catalog, Ok(catalog) if catalog.events().len() == 3));
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let config = Config::from_lookup(lookup(&[("CATALOG_PATH", "/nonexistent/catalog.json")]));
        assert!(matches!(config.catalog(), Err(CatalogError::Io(_))));
    }
}
