//! Single round trip to the model endpoint.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::api::{summarize_api_error, GenerateContentRequest, GenerateContentResponse};
use crate::utils::url::construct_api_url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (DNS, TLS, connect, client timeout).
    Request(String),
    /// The endpoint answered with a non-success status.
    Status { status: u16, message: String },
    /// The body was not a `generateContent` response.
    Decode(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Request(message) => write!(f, "request failed: {message}"),
            TransportError::Status { message, .. } => f.write_str(message),
            TransportError::Decode(message) => write!(f, "malformed response: {message}"),
        }
    }
}

impl Error for TransportError {}

/// Sends one `generateContent` request and hands back the reply text, if any.
#[async_trait]
pub trait ModelTransport: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, TransportError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpTransport {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("beacon/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(10).min(timeout))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        construct_api_url(
            &self.base_url,
            &format!("models/{}:generateContent", self.model),
        )
    }
}

#[async_trait]
impl ModelTransport for HttpTransport {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, TransportError> {
        let url = self.endpoint();
        debug!(model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| TransportError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: summarize_api_error(status.as_u16(), &body),
            });
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|err| TransportError::Decode(err.to_string()))?;
        if let Some(reason) = parsed
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
        {
            debug!(finish_reason = reason, "generateContent finished");
        }
        Ok(parsed.text())
    }
}
