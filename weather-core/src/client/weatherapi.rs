use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{WeatherQuery, WeatherResult};

use super::{WeatherClient, truncate_body};

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com";

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self { api_key, base_url: DEFAULT_BASE_URL.to_string(), http: Client::new() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    current: WaCurrent,
}

#[async_trait]
impl WeatherClient for WeatherApiClient {
    async fn lookup_by_city(&self, query: &WeatherQuery) -> Result<WeatherResult> {
        let url = format!("{}/v1/current.json", self.base_url);
        let location = query.location();

        tracing::debug!(%url, %location, "querying WeatherAPI.com");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location.as_str())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request to WeatherAPI.com (current)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read WeatherAPI current response body")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "WeatherAPI current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: WaResponse =
            serde_json::from_str(&body).context("Failed to parse WeatherAPI current JSON")?;

        Ok(WeatherResult { description: parsed.current.condition.text })
    }
}
