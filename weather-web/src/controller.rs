//! `GET /`: the weather for a fixed city, through the injected [`WeatherProvider`].

use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use weather_core::WeatherProvider;

use crate::error::ApiError;

const CITY: &str = "Miami";
const COUNTRY_CODE: &str = "US";

#[derive(Clone)]
pub struct HomeController {
    weather: Arc<dyn WeatherProvider>,
}

impl HomeController {
    pub fn new(weather: Arc<dyn WeatherProvider>) -> Self {
        Self { weather }
    }

    pub async fn index(&self) -> anyhow::Result<String> {
        self.weather.get_weather(CITY, COUNTRY_CODE).await
    }

    pub fn routes(self) -> Router {
        Router::new().route("/", get(index)).with_state(self)
    }
}

async fn index(State(controller): State<HomeController>) -> Result<String, ApiError> {
    Ok(controller.index().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct RecordingProvider {
        reply: String,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingProvider {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self { reply: reply.to_string(), ..Default::default() })
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for RecordingProvider {
        async fn get_weather(&self, city: &str, country_code: &str) -> anyhow::Result<String> {
            self.calls.lock().unwrap().push((city.to_string(), country_code.to_string()));
            Ok(self.reply.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl WeatherProvider for FailingProvider {
        async fn get_weather(&self, _city: &str, _country_code: &str) -> anyhow::Result<String> {
            anyhow::bail!("provider call failed")
        }
    }

    fn get_root() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn index_returns_provider_output_unmodified() {
        let provider = RecordingProvider::replying("WeatherService \n\nClear sky in Miami (US)");
        let controller = HomeController::new(provider.clone());

        let body = controller.index().await.unwrap();

        assert_eq!(body, "WeatherService \n\nClear sky in Miami (US)");
        assert_eq!(provider.calls(), vec![("Miami".to_string(), "US".to_string())]);
    }

    #[tokio::test]
    async fn index_calls_provider_once_per_request() {
        let provider = RecordingProvider::replying("sunny");
        let controller = HomeController::new(provider.clone());

        controller.index().await.unwrap();
        controller.index().await.unwrap();

        assert_eq!(provider.calls().len(), 2);
    }

    #[tokio::test]
    async fn index_propagates_provider_failure() {
        let controller = HomeController::new(Arc::new(FailingProvider));

        let err = controller.index().await.unwrap_err();
        assert_eq!(err.to_string(), "provider call failed");
    }

    #[tokio::test]
    async fn swapping_the_provider_changes_the_output() {
        let first = HomeController::new(RecordingProvider::replying("rain")).index().await.unwrap();
        let second = HomeController::new(RecordingProvider::replying("fog")).index().await.unwrap();

        assert_eq!(first, "rain");
        assert_eq!(second, "fog");
    }

    #[tokio::test]
    async fn get_root_serves_plain_text() {
        let provider = RecordingProvider::replying("WeatherService \n\nClear sky in Miami (US)");
        let app = HomeController::new(provider.clone()).routes();

        let response = app.oneshot(get_root()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/plain"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"WeatherService \n\nClear sky in Miami (US)");
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn get_root_maps_failure_to_server_error() {
        let app = HomeController::new(Arc::new(FailingProvider)).routes();

        let response = app.oneshot(get_root()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn other_paths_are_not_routed() {
        let provider = RecordingProvider::replying("sunny");
        let app = HomeController::new(provider.clone()).routes();

        let request = Request::builder().uri("/weather").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(provider.calls().is_empty());
    }
}
