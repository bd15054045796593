// Responsible for all communication with the upstream REST Countries API.

use anyhow::Context;
use reqwest::StatusCode;

use crate::domain::country::Country;
use crate::infra::config;

/// Thin client over the upstream dataset provider. The provider always
/// returns complete in-memory lists; all filtering happens on our side.
///
/// No retries and no caching: a failed fetch surfaces immediately as an
/// error to the caller.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    base_url: String,
    http: reqwest::Client,
}

impl RestCountriesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::rest_countries_api())
    }

    /// Fetches the full country dataset (`GET /all`).
    pub async fn fetch_all(&self) -> anyhow::Result<Vec<Country>> {
        let url = format!("{}/all", self.base_url);
        let countries = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("GET {} returned an error status", url))?
            .json::<Vec<Country>>()
            .await
            .with_context(|| format!("GET {} returned an unexpected payload", url))?;
        Ok(countries)
    }

    /// Fetches one country by alpha-3 code (`GET /alpha/{code}`).
    ///
    /// The upstream responds with a one-element array; an upstream 404 maps
    /// to `Ok(None)` so callers can distinguish "unknown code" from an
    /// upstream outage.
    pub async fn fetch_by_code(&self, code: &str) -> anyhow::Result<Option<Country>> {
        let url = format!("{}/alpha/{}", self.base_url, code);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let countries = response
            .error_for_status()
            .with_context(|| format!("GET {} returned an error status", url))?
            .json::<Vec<Country>>()
            .await
            .with_context(|| format!("GET {} returned an unexpected payload", url))?;
        Ok(countries.into_iter().next())
    }

    /// Fetches all countries in a region (`GET /region/{region}`).
    pub async fn fetch_by_region(&self, region: &str) -> anyhow::Result<Vec<Country>> {
        let url = format!("{}/region/{}", self.base_url, region);
        let countries = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("GET {} returned an error status", url))?
            .json::<Vec<Country>>()
            .await
            .with_context(|| format!("GET {} returned an unexpected payload", url))?;
        Ok(countries)
    }
}
