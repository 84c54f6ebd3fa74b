//! Country directory trait and the best-effort loader

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// One selectable country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    /// Name shown in the choice list, also the value submitted by the form
    pub display_name: String,
    /// URL of the flag image; empty when the directory has none
    pub flag_image_reference: String,
}

impl CountryEntry {
    pub fn new(display_name: impl Into<String>, flag_image_reference: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            flag_image_reference: flag_image_reference.into(),
        }
    }

    pub fn has_flag(&self) -> bool {
        !self.flag_image_reference.is_empty()
    }
}

/// Errors from fetching the directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("country directory request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("country directory answered with HTTP {0}")]
    Status(u16),

    #[error("country directory returned malformed data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Trait for country directory providers
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Fetch the full list of countries
    async fn fetch(&self) -> Result<Vec<CountryEntry>, DirectoryError>;

    /// Get provider name
    fn name(&self) -> &'static str;
}

/// Fixed, in-memory directory
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    entries: Vec<CountryEntry>,
}

impl StaticDirectory {
    pub fn new(entries: Vec<CountryEntry>) -> Self {
        Self { entries }
    }

    /// A directory with no countries
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CountryDirectory for StaticDirectory {
    async fn fetch(&self) -> Result<Vec<CountryEntry>, DirectoryError> {
        Ok(self.entries.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Fetch the country list once, swallowing failures
///
/// A failed fetch is logged and yields an empty list; the form stays usable
/// with nothing to choose from.
pub async fn load_countries(directory: &dyn CountryDirectory) -> Vec<CountryEntry> {
    match directory.fetch().await {
        Ok(countries) => {
            info!(
                provider = directory.name(),
                count = countries.len(),
                "loaded country directory"
            );
            countries
        }
        Err(e) => {
            warn!(provider = directory.name(), "Error fetching countries: {}", e);
            Vec::new()
        }
    }
}
