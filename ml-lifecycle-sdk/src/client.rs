//! HTTP client implementation
//!
//! Thin wrapper over `reqwest` that handles authentication, logging and
//! timeouts. Responses come back as [`ApiResponse`] so callers can assert on
//! status codes themselves; nothing here retries a failed request.

use crate::config::{AuthConfig, SdkConfig};
use crate::error::{SdkError, SdkResult};
use reqwest::{header, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Status code and raw body of a completed request.
///
/// The wire format is JSON throughout, but the body is kept as text so a
/// failing response can be reported verbatim.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body, regardless of status code.
    pub fn json<T: DeserializeOwned>(&self) -> SdkResult<T> {
        serde_json::from_str(&self.body).map_err(SdkError::Serialization)
    }

    /// Deserialize the body of a successful response; a non-2xx status is an
    /// [`SdkError::UnexpectedPayload`].
    pub fn success_json<T: DeserializeOwned>(&self) -> SdkResult<T> {
        if !self.is_success() {
            return Err(SdkError::UnexpectedPayload(format!(
                "request returned status {}: {}",
                self.status, self.body
            )));
        }
        self.json()
    }
}

/// The HTTP client for talking to the ML service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: Arc<SdkConfig>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        config.validate()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        // Custom headers from the configuration
        for (name, value) in &config.custom_headers {
            if let (Ok(name), Ok(value)) = (
                header::HeaderName::try_from(name.as_str()),
                header::HeaderValue::try_from(value.as_str()),
            ) {
                headers.insert(name, value);
            }
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(SdkError::Transport)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Build the full URL for an endpoint
    pub fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> SdkResult<ApiResponse> {
        let request = self.client.request(Method::GET, self.url(path));
        self.execute(Method::GET, path, request).await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> SdkResult<ApiResponse> {
        let request = self.client.request(Method::POST, self.url(path)).json(body);
        self.execute(Method::POST, path, request).await
    }

    /// Make a POST request with no body
    pub async fn post_empty(&self, path: &str) -> SdkResult<ApiResponse> {
        let request = self.client.request(Method::POST, self.url(path));
        self.execute(Method::POST, path, request).await
    }

    /// Make a multipart POST request
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> SdkResult<ApiResponse> {
        let request = self
            .client
            .request(Method::POST, self.url(path))
            .multipart(form);
        self.execute(Method::POST, path, request).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> SdkResult<ApiResponse> {
        let request = self.client.request(Method::DELETE, self.url(path));
        self.execute(Method::DELETE, path, request).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> SdkResult<ApiResponse> {
        let request = self.add_auth(request);

        if self.config.enable_logging {
            debug!("Request: {} {}", method, self.url(path));
        }

        let response = request.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        if self.config.enable_logging {
            debug!("Response: {} {} -> {} {}", method, path, status, body);
        }

        Ok(ApiResponse { status, body })
    }

    fn map_error(&self, err: reqwest::Error) -> SdkError {
        if err.is_timeout() {
            SdkError::Timeout(self.config.timeout.as_secs())
        } else {
            SdkError::Transport(err)
        }
    }

    fn add_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.auth {
            AuthConfig::None => request,
            AuthConfig::ApiKey(key) => request.header("X-API-Key", key.as_str()),
            AuthConfig::BearerToken(token) => {
                request.header(header::AUTHORIZATION, format!("Bearer {}", token))
            }
            AuthConfig::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
        }
    }
}
