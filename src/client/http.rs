//! HTTP dispatcher backed by reqwest
//!
//! Turns a [`RequestDescriptor`] into a real call against the service:
//! base URL plus expanded path and query, credentials, `api-version` in the
//! `Accept` header and the JSON body. Status codes are mapped onto
//! [`ApiError`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use reqwest::{Client as HttpClient, Response, StatusCode};

use super::dispatch::Dispatcher;
use super::rate_limit::{RateLimiterSet, RequestClass};
use super::request::RequestDescriptor;
use crate::error::{ApiError, Result};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fallback wait when a 429 carries no usable `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// How requests are authenticated
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Personal access token, sent as Basic auth with an empty user name
    Pat(String),
    /// OAuth or Entra bearer token
    Bearer(String),
}

impl Credentials {
    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        match self {
            Credentials::Pat(pat) => {
                let encoded = general_purpose::STANDARD.encode(format!(":{}", pat));
                format!("Basic {}", encoded)
            }
            Credentials::Bearer(token) => format!("Bearer {}", token),
        }
    }
}

// Tokens must never reach logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Pat(_) => f.write_str("Pat(***)"),
            Credentials::Bearer(_) => f.write_str("Bearer(***)"),
        }
    }
}

/// Dispatcher that performs requests over HTTP
pub struct HttpDispatcher {
    http: HttpClient,
    base_url: String,
    credentials: Credentials,
    rate_limiter: Arc<RateLimiterSet>,
}

impl HttpDispatcher {
    /// Create a dispatcher for a collection or organization URL,
    /// e.g. `https://dev.azure.com/fabrikam`.
    pub fn new(base_url: &str, credentials: Credentials, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(base_url.to_string()).into());
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("workrest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            credentials,
            rate_limiter: Arc::new(RateLimiterSet::new()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request.
    pub fn url_for(&self, request: &RequestDescriptor) -> String {
        format!("{}/{}", self.base_url, request.path_and_query())
    }

    /// Whether a 429 has switched on pacing for this class of request.
    pub fn is_throttled(&self, class: RequestClass) -> bool {
        self.rate_limiter.is_active(class)
    }

    async fn handle_response(
        &self,
        response: Response,
        class: RequestClass,
    ) -> Result<Option<serde_json::Value>> {
        let status = response.status();

        if status.is_success() {
            if status == StatusCode::NO_CONTENT {
                return Ok(None);
            }
            let text = response.text().await.map_err(ApiError::from)?;
            if text.trim().is_empty() {
                return Ok(None);
            }
            let value = serde_json::from_str(&text).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            return Ok(Some(value));
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let msg = error_message(response, "Resource not found").await;
                Err(ApiError::NotFound(msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                self.rate_limiter.activate(class);
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.trim().parse::<u64>().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let msg = error_message(response, "Bad request").await;
                Err(ApiError::BadRequest(msg).into())
            }
            StatusCode::CONFLICT | StatusCode::PRECONDITION_FAILED => {
                let msg = error_message(response, "Conflict").await;
                Err(ApiError::Conflict(msg).into())
            }
            status if status.is_server_error() => {
                let fallback = format!("Server error: {}", status);
                let msg = error_message(response, &fallback).await;
                Err(ApiError::ServerError(msg).into())
            }
            _ => Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into()),
        }
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, request: RequestDescriptor) -> Result<Option<serde_json::Value>> {
        let class = RequestClass::from_method(request.method);
        self.rate_limiter.wait_for(class).await;

        let url = self.url_for(&request);
        debug!(
            "{} {} {} (api-version {})",
            request.operation, request.method, url, request.api_version
        );

        let accept = HeaderValue::from_str(&format!(
            "application/json;api-version={}",
            request.api_version
        ))
        .map_err(|_| ApiError::InvalidUrl(format!("bad api-version '{}'", request.api_version)))?;

        let mut builder = self
            .http
            .request(request.method.into(), &url)
            .header(ACCEPT, accept)
            .header(AUTHORIZATION, self.credentials.authorization_header());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        debug!("{} -> {}", request.operation, response.status());

        self.handle_response(response, class).await
    }
}

/// Pull the service's `message` out of an error body, falling back to the raw
/// text or `fallback` when there is none.
async fn error_message(response: Response, fallback: &str) -> String {
    match response.text().await {
        Ok(text) => message_from_body(&text).unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}

fn message_from_body(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let message = serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));
    Some(message.unwrap_or_else(|| text.to_string()))
}
