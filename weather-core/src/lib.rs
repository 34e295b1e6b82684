//! Core library for the `weather-web` server.
//!
//! This crate defines:
//! - The `WeatherProvider` capability and its `WeatherService` implementation
//! - Clients for the remote weather data providers
//! - Configuration & credentials handling
//! - Shared domain models (queries, results)
//!
//! It is used by `weather-web`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod model;
pub mod service;

pub use client::{ProviderId, WeatherClient, client_from_config};
pub use config::{Config, ProviderConfig};
pub use model::{WeatherQuery, WeatherResult};
pub use service::{WeatherProvider, WeatherService};
