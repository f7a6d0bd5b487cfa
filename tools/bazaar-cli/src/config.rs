//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use bazaar_commerce::{Currency, Money};
use bazaar_observability::LoggingConfig;
use bazaar_session::DelayConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["bazaar.toml", ".bazaar.toml", "bazaar.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BazaarConfig {
    /// Search catalogue configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Session and simulated backend configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BazaarConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Find the nearest config file at or above `start`.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// `[catalog]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// RNG seed for the generated search catalogue.
    pub seed: u64,
    /// Number of generated products.
    pub size: usize,
    /// Upper bound of the price slider, in whole currency units.
    pub price_ceiling: Option<i64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            size: 24,
            price_ceiling: Some(1000),
        }
    }
}

impl CatalogConfig {
    /// The price ceiling as money in `currency`. Fails when it does not fit.
    pub fn price_ceiling_in(&self, currency: Currency) -> Result<Option<Money>> {
        self.price_ceiling
            .map(|ceiling| {
                Money::try_from_major(ceiling, currency)
                    .ok_or_else(|| anyhow!("catalog.price_ceiling is out of range: {}", ceiling))
            })
            .transpose()
    }
}

/// `[session]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Marker file. Defaults to `~/.local/share/bazaar/session.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
    pub login_delay_ms: u64,
    pub order_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            login_delay_ms: 1000,
            order_delay_ms: 1500,
        }
    }
}

impl SessionConfig {
    pub fn delays(&self) -> DelayConfig {
        DelayConfig::from_millis(self.login_delay_ms, self.order_delay_ms)
    }

    /// Marker file path with a leading `~/` expanded.
    pub fn resolved_store_path(&self) -> PathBuf {
        match &self.store_path {
            Some(path) => match path.strip_prefix("~") {
                Ok(rest) => home_dir().join(rest),
                Err(_) => path.clone(),
            },
            None => data_dir().join("bazaar").join("session.json"),
        }
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
}

/// Get the platform-specific data directory.
fn data_dir() -> PathBuf {
    if std::env::var_os("HOME").is_some() {
        home_dir().join(".local").join("share")
    } else {
        std::env::temp_dir()
    }
}

/// Generate a default bazaar.toml config file.
pub fn generate_default_config() -> String {
    r#"# Bazaar configuration

[catalog]
seed = 42            # RNG seed for the search catalogue
size = 24
price_ceiling = 1000

[session]
# store_path = "~/.local/share/bazaar/session.json"
login_delay_ms = 1000
order_delay_ms = 1500

[logging]
format = "human"     # or "json"
level = "info"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_observability::{LogFormat, LogLevel};
    use std::time::Duration;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: BazaarConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, BazaarConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: BazaarConfig = toml::from_str(
            r#"
            [catalog]
            seed = 7

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.seed, 7);
        assert_eq!(config.catalog.size, 24);
        assert_eq!(config.session.delays().order, Duration::from_millis(1500));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_price_ceiling_out_of_range_is_an_error() {
        let catalog = CatalogConfig::default();
        assert_eq!(
            catalog.price_ceiling_in(Currency::USD).unwrap(),
            Some(Money::from_major(1000, Currency::USD))
        );

        let catalog = CatalogConfig {
            price_ceiling: Some(i64::MAX / 10),
            ..CatalogConfig::default()
        };
        assert!(catalog.price_ceiling_in(Currency::USD).is_err());

        let catalog = CatalogConfig {
            price_ceiling: None,
            ..CatalogConfig::default()
        };
        assert_eq!(catalog.price_ceiling_in(Currency::USD).unwrap(), None);
    }

    #[test]
    fn test_discover_walks_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(BazaarConfig::discover(&nested), None);

        let path = dir.path().join(".bazaar.toml");
        std::fs::write(&path, "[catalog]\nsize = 3\n").unwrap();
        assert_eq!(BazaarConfig::discover(&nested), Some(path.clone()));
        assert_eq!(BazaarConfig::load(&path).unwrap().catalog.size, 3);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bazaar.json");
        let mut config = BazaarConfig::default();
        config.session.login_delay_ms = 10;
        config.save(&path).unwrap();
        assert_eq!(BazaarConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_store_path_expands_home() {
        let session = SessionConfig {
            store_path: Some(PathBuf::from("/tmp/markers.json")),
            ..SessionConfig::default()
        };
        assert_eq!(session.resolved_store_path(), PathBuf::from("/tmp/markers.json"));

        let session = SessionConfig {
            store_path: Some(PathBuf::from("~/markers.json")),
            ..SessionConfig::default()
        };
        assert!(session.resolved_store_path().ends_with("markers.json"));
        assert!(!session.resolved_store_path().starts_with("~"));
    }
}
