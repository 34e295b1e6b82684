use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;
use tokio::net::TcpListener;
use weather_core::{Config, ProviderId};

use crate::app;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-web", version, about = "Serves the current weather over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific provider.
    Configure {
        /// Provider short name, e.g. "openweather" or "weatherapi".
        provider: ProviderId,

        /// Make this provider the default even if another one is already set.
        #[arg(long)]
        default: bool,
    },

    /// Start the HTTP server.
    Serve {
        #[arg(long, env = "WEATHER_HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(long, env = "WEATHER_PORT", default_value_t = 5000)]
        port: u16,

        /// Provider to query; falls back to the configured default.
        #[arg(long, env = "WEATHER_PROVIDER")]
        provider: Option<ProviderId>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider, default } => configure(provider, default),
            Command::Serve { host, port, provider } => serve(&host, port, provider).await,
        }
    }
}

fn configure(provider: ProviderId, make_default: bool) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new(&format!("API key for {provider}:"))
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let replaced = store_api_key(&mut config, provider, api_key.trim(), make_default);
    let path = config.save()?;

    let action = if replaced { "Replaced" } else { "Saved" };
    println!("{action} {provider} credentials in {}", path.display());
    Ok(())
}

/// Returns whether `provider` already had a key.
fn store_api_key(
    config: &mut Config,
    provider: ProviderId,
    api_key: &str,
    make_default: bool,
) -> bool {
    let replaced = config.is_provider_configured(provider);

    config.upsert_provider_api_key(provider, api_key.to_string());
    if make_default {
        config.set_default_provider(provider);
    }

    replaced
}

async fn serve(host: &str, port: u16, provider: Option<ProviderId>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let router = app::build(&config, provider)?;

    let addr = format!("{host}:{port}");
    let listener =
        TcpListener::bind(&addr).await.with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await.context("HTTP server failed")?;
    Ok(())
}
