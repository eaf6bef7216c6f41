//! Client for the IBGE geographic lookup service.
//!
//! Two read-only endpoints are consumed: the region (UF) list and the
//! municipality list of one region. Both are requested ordered by name
//! and the server ordering is preserved as-is.

use crate::domain::{Locality, LookupError, LookupResult, Region};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Public IBGE localities API.
pub const DEFAULT_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Environment variable overriding the lookup base URL.
pub const BASE_URL_ENV: &str = "RECICLA_LOOKUP_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client for the lookup service.
///
/// Cheap to clone; every background fetch thread gets its own handle to
/// the shared connection pool.
#[derive(Debug, Clone)]
pub struct LookupClient {
    base_url: String,
    client: Client,
}

impl LookupClient {
    /// Creates a client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (TLS backend initialization failure).
    pub fn new(base_url: impl Into<String>) -> LookupResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| LookupError::Network(error.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Creates a client against `RECICLA_LOOKUP_URL`, falling back to
    /// the public IBGE endpoint.
    pub fn from_env() -> LookupResult<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Fetches all regions, ordered by name by the service.
    pub fn regions(&self) -> LookupResult<Vec<Region>> {
        self.get_list(&self.regions_url())
    }

    /// Fetches the municipalities of one region, ordered by name.
    pub fn localities(&self, uf: &str) -> LookupResult<Vec<Locality>> {
        self.get_list(&self.localities_url(uf))
    }

    fn regions_url(&self) -> String {
        format!("{}/estados?orderBy=nome", self.base_url)
    }

    fn localities_url(&self, uf: &str) -> String {
        format!("{}/estados/{}/municipios?orderBy=nome", self.base_url, uf)
    }

    fn get_list<T: DeserializeOwned>(&self, url: &str) -> LookupResult<Vec<T>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| LookupError::Network(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json::<Vec<T>>()
            .map_err(|error| LookupError::InvalidPayload(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_url() {
        let client = LookupClient::new("https://example.test/v1").unwrap();
        assert_eq!(
            client.regions_url(),
            "https://example.test/v1/estados?orderBy=nome"
        );
    }

    #[test]
    fn test_localities_url_scoped_to_region() {
        let client = LookupClient::new("https://example.test/v1").unwrap();
        assert_eq!(
            client.localities_url("SP"),
            "https://example.test/v1/estados/SP/municipios?orderBy=nome"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = LookupClient::new("https://example.test/v1/").unwrap();
        assert_eq!(
            client.regions_url(),
            "https://example.test/v1/estados?orderBy=nome"
        );
    }
}
