use crate::{
    Config, WeatherQuery, WeatherResult,
    client::{openweather::OpenWeatherClient, weatherapi::WeatherApiClient},
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod openweather;
pub mod weatherapi;

/// Remote weather data providers this crate can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeather,
    WeatherApi,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "openweather",
            ProviderId::WeatherApi => "weatherapi",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenWeather, ProviderId::WeatherApi]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "openweather" => Ok(ProviderId::OpenWeather),
            "weatherapi" => Ok(ProviderId::WeatherApi),
            _ => {
                let supported: Vec<&str> = ProviderId::all().iter().map(ProviderId::as_str).collect();
                Err(anyhow::anyhow!(
                    "Unknown provider '{value}'. Supported providers: {}.",
                    supported.join(", ")
                ))
            }
        }
    }
}

impl std::str::FromStr for ProviderId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderId::try_from(s)
    }
}

/// Client for a remote weather data provider.
#[async_trait]
pub trait WeatherClient: Send + Sync + Debug {
    /// Current conditions for `query`. Network failures, unknown locations and
    /// malformed responses all surface as an error.
    async fn lookup_by_city(&self, query: &WeatherQuery) -> anyhow::Result<WeatherResult>;
}

/// Construct a client from config and explicit ProviderId.
pub fn client_from_config(id: ProviderId, config: &Config) -> anyhow::Result<Box<dyn WeatherClient>> {
    let api_key = require_api_key(id, config)?;
    let base_url = config.provider_base_url(id);

    let boxed: Box<dyn WeatherClient> = match id {
        ProviderId::OpenWeather => {
            let client = OpenWeatherClient::new(api_key.to_owned());
            Box::new(match base_url {
                Some(url) => client.with_base_url(url),
                None => client,
            })
        }
        ProviderId::WeatherApi => {
            let client = WeatherApiClient::new(api_key.to_owned());
            Box::new(match base_url {
                Some(url) => client.with_base_url(url),
                None => client,
            })
        }
    };

    Ok(boxed)
}

pub(crate) fn require_api_key(id: ProviderId, config: &Config) -> anyhow::Result<&str> {
    config.provider_api_key(id).ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for provider '{id}'.\n\
                 Hint: run `weather-web configure {id}` and enter your API key."
        )
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
