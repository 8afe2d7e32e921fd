//! Storefront configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::logging::{LogFormat, LogLevel, StructuredLogger};
use crate::money::{Currency, PriceFormatter};

/// Storefront configuration file.
///
/// ```toml
/// [pricing]
/// currency = "BRL"
///
/// [logging]
/// level = "debug"
/// format = "human"
///
/// [cart]
/// session_id = "demo-session"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Price display configuration.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Log output configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Cart session configuration.
    #[serde(default)]
    pub cart: CartConfig,
}

/// Price display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency prices are displayed in.
    #[serde(default)]
    pub currency: Currency,
}

/// Log output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
}

/// Cart session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Session the cart is stored under.
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

fn default_session_id() -> String {
    "demo-session".to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            session_id: default_session_id(),
        }
    }
}

/// Environment variable holding the config file path.
pub const CONFIG_ENV_VAR: &str = "STOREFRONT_CONFIG";

impl StorefrontConfig {
    /// Load config from the file named by `STOREFRONT_CONFIG`, or defaults if unset.
    pub fn from_env() -> Result<Self> {
        Self::load_optional(std::env::var_os(CONFIG_ENV_VAR))
    }

    /// Load config from a file if a path is given, otherwise use defaults.
    pub fn load_optional(path: Option<impl AsRef<Path>>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render config as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Price formatter for the configured currency.
    pub fn price_formatter(&self) -> PriceFormatter {
        PriceFormatter::new(self.pricing.currency)
    }

    /// Logger for a component of the configured cart session.
    pub fn logger(&self, component: &str) -> StructuredLogger {
        StructuredLogger::new(self.cart.session_id.clone())
            .with_component(component)
            .with_min_level(self.logging.level)
            .with_format(self.logging.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.pricing.currency, Currency::BRL);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.cart.session_id, "demo-session");
    }

    #[test]
    fn test_parse_toml() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [pricing]
            currency = "USD"

            [logging]
            level = "debug"
            format = "human"
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.currency, Currency::USD);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.cart.session_id, "demo-session");
        assert_eq!(config.price_formatter().format(2.5), "$2.50");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_rejects_unknown_currency() {
        assert!(StorefrontConfig::from_toml_str("[pricing]\ncurrency = \"XYZ\"").is_err());
    }

    #[test]
    fn test_toml_round_trip_keeps_session() {
        let mut config = StorefrontConfig::default();
        config.cart.session_id = "abc".to_string();
        let text = config.to_toml_string().unwrap();
        assert_eq!(StorefrontConfig::from_toml_str(&text).unwrap(), config);
    }

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_toml_file() {
        let path = write_temp(
            "storefront.toml",
            "[pricing]\ncurrency = \"EUR\"\n\n[cart]\nsession_id = \"s-42\"\n",
        );
        let config = StorefrontConfig::load_optional(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.pricing.currency, Currency::EUR);
        assert_eq!(config.cart.session_id, "s-42");
        assert_eq!(config.price_formatter().format(9.5), "\u{20ac}\u{a0}9,50");
    }

    #[test]
    fn test_load_json_file() {
        let path = write_temp(
            "storefront.json",
            r#"{"logging": {"level": "warn", "format": "human"}}"#,
        );
        let config = StorefrontConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.pricing.currency, Currency::BRL);
    }

    #[test]
    fn test_load_optional_without_path() {
        let config = StorefrontConfig::load_optional(None::<&Path>).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = StorefrontConfig::load("/nonexistent/storefront.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_logger_uses_session() {
        let logger = StorefrontConfig::default().logger("cart-view");
        assert_eq!(logger.session_id(), "demo-session");
    }
}
