use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{WeatherQuery, WeatherResult};

use super::{WeatherClient, truncate_body};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    async fn lookup_by_city(&self, query: &WeatherQuery) -> Result<WeatherResult> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let location = query.location();

        tracing::debug!(%url, %location, "querying OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[("q", location.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| anyhow!("OpenWeather returned no conditions for {location}"))?;

        Ok(WeatherResult { description })
    }
}
