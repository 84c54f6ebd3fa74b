// File: src/config.rs
// Purpose: Configuration parsing from signup.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides `countries.endpoint`
pub const COUNTRIES_URL_ENV: &str = "SIGNUP_COUNTRIES_URL";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub countries: CountriesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Country directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesConfig {
    /// REST Countries compatible listing URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whether to fetch the directory at all
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
}

// Default values
fn default_endpoint() -> String {
    signup_countries::DEFAULT_ENDPOINT.to_string()
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CountriesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            enabled: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Load configuration from signup.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    /// Apply an endpoint override, as read from [`COUNTRIES_URL_ENV`]
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.countries.endpoint = endpoint;
        }
        self
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        let endpoint = std::env::var(COUNTRIES_URL_ENV).ok();
        self.with_endpoint_override(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.countries.endpoint, signup_countries::DEFAULT_ENDPOINT);
        assert!(config.countries.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert!(config.countries.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
            [countries]
            enabled = false

            [logging]
            level = "signup_form=debug"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.countries.enabled);
        assert_eq!(config.countries.endpoint, signup_countries::DEFAULT_ENDPOINT);
        assert_eq!(config.logging.level, "signup_form=debug");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("signup.toml")).unwrap();
        assert!(config.countries.enabled);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[countries]\nendpoint = \"http://localhost:9000/all\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.countries.endpoint, "http://localhost:9000/all");
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[countries\nendpoint = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[rstest]
    #[case(Some("http://mirror/all"), "http://mirror/all")]
    #[case(Some("  "), signup_countries::DEFAULT_ENDPOINT)]
    #[case(Some(""), signup_countries::DEFAULT_ENDPOINT)]
    #[case(None, signup_countries::DEFAULT_ENDPOINT)]
    fn test_endpoint_override(#[case] value: Option<&str>, #[case] expected: &str) {
        let config = Config::default().with_endpoint_override(value.map(str::to_string));
        assert_eq!(config.countries.endpoint, expected);
    }
}
