//! The weather lookup capability and its provider-backed implementation.

use std::{fmt, sync::Arc};

use async_trait::async_trait;

use crate::{
    Config,
    client::{ProviderId, WeatherClient, client_from_config, require_api_key},
    model::WeatherQuery,
};

/// Capability injected into request handlers: a printable weather report for a location.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn get_weather(&self, city: &str, country_code: &str) -> anyhow::Result<String>;
}

type ClientFactory = dyn Fn() -> anyhow::Result<Box<dyn WeatherClient>> + Send + Sync;

/// Looks the weather up through a remote provider, building a new client for every call.
#[derive(Clone)]
pub struct WeatherService {
    connect: Arc<ClientFactory>,
}

impl WeatherService {
    pub fn new<F>(connect: F) -> Self
    where
        F: Fn() -> anyhow::Result<Box<dyn WeatherClient>> + Send + Sync + 'static,
    {
        Self { connect: Arc::new(connect) }
    }

    /// Service bound to provider `id` as configured in `config`.
    ///
    /// Fails immediately when `id` has no API key, rather than on the first request.
    pub fn from_config(id: ProviderId, config: &Config) -> anyhow::Result<Self> {
        require_api_key(id, config)?;

        let config = config.clone();
        Ok(Self::new(move || client_from_config(id, &config)))
    }
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for WeatherService {
    async fn get_weather(&self, city: &str, country_code: &str) -> anyhow::Result<String> {
        let client = (self.connect)()?;
        let query = WeatherQuery::new(city, country_code);

        let weather = client.lookup_by_city(&query).await?;
        tracing::debug!(city, country_code, description = %weather.description, "weather lookup done");

        Ok(format!("WeatherService \n\n{} in {} ({})", weather.description, city, country_code))
    }
}
