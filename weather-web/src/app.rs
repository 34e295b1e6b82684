//! Composition root: builds the concrete weather service and hands it to the controller.

use std::sync::Arc;

use axum::{Router, middleware};
use weather_core::{Config, ProviderId, WeatherProvider, WeatherService};

use crate::{controller::HomeController, logging};

pub fn build(config: &Config, provider: Option<ProviderId>) -> anyhow::Result<Router> {
    let id = match provider {
        Some(id) => id,
        None => config.default_provider_id()?,
    };

    let weather: Arc<dyn WeatherProvider> = Arc::new(WeatherService::from_config(id, config)?);
    tracing::info!(provider = %id, "weather service ready");

    Ok(router(HomeController::new(weather)))
}

pub fn router(controller: HomeController) -> Router {
    controller.routes().layer(middleware::from_fn(logging::request_logger))
}
