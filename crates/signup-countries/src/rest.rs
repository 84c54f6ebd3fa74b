// File: src/rest.rs
// Purpose: REST Countries client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::directory::{CountryDirectory, CountryEntry, DirectoryError};

/// Public REST Countries listing, trimmed to the fields the form uses
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,flags";

#[derive(Debug, Deserialize)]
struct ApiCountry {
    name: ApiName,
    #[serde(default)]
    flags: ApiFlags,
}

#[derive(Debug, Deserialize)]
struct ApiName {
    common: String,
}

#[derive(Debug, Default, Deserialize)]
struct ApiFlags {
    #[serde(default)]
    svg: Option<String>,
}

/// Decode a REST Countries response body
///
/// Only `name.common` and `flags.svg` are read; other fields are ignored. A
/// country without an SVG flag gets an empty reference.
pub fn parse_directory(body: &str) -> Result<Vec<CountryEntry>, DirectoryError> {
    let countries: Vec<ApiCountry> = serde_json::from_str(body)?;
    Ok(countries
        .into_iter()
        .map(|country| CountryEntry {
            display_name: country.name.common,
            flag_image_reference: country.flags.svg.unwrap_or_default(),
        })
        .collect())
}

/// Country directory backed by a REST Countries compatible endpoint
///
/// One request per fetch; no retry and no caching.
#[derive(Debug, Clone)]
pub struct RestCountries {
    client: Client,
    endpoint: String,
}

impl RestCountries {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for RestCountries {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl CountryDirectory for RestCountries {
    async fn fetch(&self) -> Result<Vec<CountryEntry>, DirectoryError> {
        debug!(endpoint = %self.endpoint, "fetching country directory");

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_directory(&body)
    }

    fn name(&self) -> &'static str {
        "restcountries"
    }
}
