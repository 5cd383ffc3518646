use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::parse::{parse_location, parse_news, parse_place_name};
use super::transport::{HttpTransport, ModelTransport};
use super::{prompts, Gateway, GatewayError, GEOCODE_FALLBACK};
use crate::api::schema::{location_response_schema, news_response_schema};
use crate::api::GenerateContentRequest;
use crate::core::news::{LocationState, NewsItem};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct GatewaySettings {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub web_search: bool,
    pub request_timeout: Duration,
}

impl GatewaySettings {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            web_search: true,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

pub struct GeminiGateway<T = HttpTransport> {
    transport: T,
    web_search: bool,
}

impl GeminiGateway<HttpTransport> {
    pub fn from_settings(settings: &GatewaySettings) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new(
            settings.base_url.clone(),
            settings.api_key.clone(),
            settings.model.clone(),
            settings.request_timeout,
        )?;
        Ok(Self::new(transport, settings.web_search))
    }
}

impl<T: ModelTransport> GeminiGateway<T> {
    pub fn new(transport: T, web_search: bool) -> Self {
        Self {
            transport,
            web_search,
        }
    }

    async fn try_reverse_geocode(&self, lat: f64, lng: f64) -> Result<String, GatewayError> {
        let request = GenerateContentRequest::text(prompts::reverse_geocode(lat, lng));
        let text = self
            .transport
            .generate(&request)
            .await
            .map_err(|err| GatewayError::location(err.to_string()))?;
        Ok(parse_place_name(text.as_deref().unwrap_or_default()))
    }
}

#[async_trait]
impl<T: ModelTransport> Gateway for GeminiGateway<T> {
    async fn resolve_location(&self, query: &str) -> Result<LocationState, GatewayError> {
        debug!(query, "resolving location");
        let request = GenerateContentRequest::text(prompts::resolve_location(query))
            .with_schema(location_response_schema());

        let result = match self.transport.generate(&request).await {
            Ok(text) => parse_location(text.as_deref().unwrap_or_default()),
            Err(err) => Err(GatewayError::location(err.to_string())),
        };

        if let Err(err) = &result {
            warn!(query, error = %err, "location resolution failed");
        }
        result
    }

    async fn fetch_good_news(
        &self,
        location: &str,
        year: i32,
    ) -> Result<Vec<NewsItem>, GatewayError> {
        debug!(location, year, web_search = self.web_search, "fetching dispatches");
        let request = GenerateContentRequest::text(prompts::good_news(location, year))
            .with_schema(news_response_schema())
            .with_web_search(self.web_search);

        let result = match self.transport.generate(&request).await {
            Ok(text) => parse_news(text.as_deref().unwrap_or_default(), location, year),
            Err(err) => Err(GatewayError::news(err.to_string())),
        };

        match &result {
            Ok(items) => debug!(location, year, count = items.len(), "dispatches received"),
            Err(err) => warn!(location, year, error = %err, "news fetch failed"),
        }
        result
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> String {
        match self.try_reverse_geocode(lat, lng).await {
            Ok(name) => name,
            Err(err) => {
                warn!(lat, lng, error = %err, "geocoding failed, using fallback label");
                GEOCODE_FALLBACK.to_string()
            }
        }
    }
}
