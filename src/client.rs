//! HTTP client for the reqres API.
//!
//! [`UserService`] is the seam the contract cases are written against;
//! [`ReqresClient`] is its reqwest-backed implementation. Every call issues
//! exactly one request and hands back an [`ApiResponse`] regardless of the
//! status code: judging the status is the caller's job.

use crate::config::{ReqresConfig, API_KEY_HEADER};
use crate::endpoints::Endpoint;
use crate::error::{ContractError, ContractResult};
use crate::logging::{log_debug, log_error, log_trace};
use crate::models::{Credentials, UserPayload};
use crate::schemas::ResponseSchema;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// Status code and decoded body of one call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub endpoint: Endpoint,
    pub status: StatusCode,
    /// `None` when the body was empty (e.g. 204 No Content) or not JSON
    pub body: Option<Value>,
    pub raw_body: String,
}

impl ApiResponse {
    /// Fail unless the status equals `expected`.
    pub fn expect_status(&self, expected: u16) -> ContractResult<&Self> {
        if self.status.as_u16() == expected {
            Ok(self)
        } else {
            Err(ContractError::status_mismatch(
                self.endpoint.to_string(),
                expected,
                self.status.as_u16(),
            ))
        }
    }

    /// The JSON body, failing if the response had none.
    ///
    /// Bodies are only required to be JSON once a case reads them, so a
    /// 404 with an HTML page still satisfies a status-only check.
    pub fn json(&self) -> ContractResult<&Value> {
        match &self.body {
            Some(body) => Ok(body),
            None if self.raw_body.trim().is_empty() => Err(
                ContractError::response_parsing_error(
                    self.endpoint.to_string(),
                    "Response body is empty",
                ),
            ),
            None => {
                let reason = serde_json::from_str::<Value>(&self.raw_body)
                    .err()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                Err(ContractError::response_parsing_error(
                    self.endpoint.to_string(),
                    format!("Invalid JSON: {reason}"),
                ))
            }
        }
    }

    /// Decode the body into a typed model.
    pub fn parse<T: DeserializeOwned>(&self) -> ContractResult<T> {
        let body = self.json()?;
        serde_json::from_value(body.clone()).map_err(|e| {
            ContractError::response_parsing_error(
                self.endpoint.to_string(),
                format!("Body does not match {}: {e}", std::any::type_name::<T>()),
            )
        })
    }

    /// Validate the body against a named schema.
    pub fn validate(&self, schema: ResponseSchema) -> ContractResult<()> {
        schema.validate(self.json()?)
    }
}

/// Operations of the remote user-management service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// `GET /api/users?page={page}`
    async fn list_users(&self, page: u32) -> ContractResult<ApiResponse>;

    /// `GET /api/users/{id}`
    async fn get_user(&self, id: u32) -> ContractResult<ApiResponse>;

    /// `GET /api/unknown/{id}`
    async fn get_unknown(&self, id: u32) -> ContractResult<ApiResponse>;

    /// `POST /api/users`
    async fn create_user(&self, payload: &UserPayload) -> ContractResult<ApiResponse>;

    /// `PUT /api/users/{id}`
    async fn update_user(&self, id: u32, payload: &UserPayload) -> ContractResult<ApiResponse>;

    /// `DELETE /api/users/{id}`
    async fn delete_user(&self, id: u32) -> ContractResult<ApiResponse>;

    /// `POST /api/register`
    async fn register(&self, credentials: &Credentials) -> ContractResult<ApiResponse>;
}

/// reqwest-backed [`UserService`]
#[derive(Debug, Clone)]
pub struct ReqresClient {
    http: reqwest::Client,
    config: ReqresConfig,
}

impl ReqresClient {
    /// Create a client for the configured service
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ConfigurationError`] if the configuration
    /// fails validation or the HTTP client cannot be built.
    pub fn new(config: ReqresConfig) -> ContractResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .default_headers(Self::build_default_headers(&config.api_key)?);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            ContractError::configuration_error(format!("Failed to build HTTP client: {e}"))
        })?;

        log_debug!(
            base_url = %config.base_url,
            timeout_ms = config.request_timeout.map(|t| t.as_millis() as u64),
            "Reqres client initialized"
        );

        Ok(Self { http, config })
    }

    /// Create a client from `REQRES_*` environment variables
    pub fn from_env() -> ContractResult<Self> {
        Self::new(ReqresConfig::from_env()?)
    }

    pub fn config(&self) -> &ReqresConfig {
        &self.config
    }

    /// Headers sent with every request: the API key and a JSON `Accept`.
    pub fn build_default_headers(api_key: &str) -> ContractResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            HeaderValue::from_str(api_key).map_err(|e| {
                ContractError::configuration_error(format!("Invalid API key format: {e}"))
            })?,
        );

        Ok(headers)
    }

    /// Issue one request and decode whatever comes back.
    async fn send<B: Serialize + Sync>(
        &self,
        endpoint: Endpoint,
        payload: Option<&B>,
    ) -> ContractResult<ApiResponse> {
        let url = endpoint.url(self.config.trimmed_base_url());
        let mut request = self
            .http
            .request(endpoint.method(), &url)
            .query(&endpoint.query());
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        log_trace!(endpoint = %endpoint, url = %url, "Sending request");

        let start_time = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;
        let status = response.status();

        let raw_body = response.text().await.map_err(|e| {
            log_error!(
                endpoint = %endpoint,
                status = status.as_u16(),
                error = %e,
                "Failed to read response body"
            );
            transport_error(endpoint, e)
        })?;

        log_debug!(
            endpoint = %endpoint,
            status = status.as_u16(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            body_bytes = raw_body.len(),
            "Received response"
        );

        let body = if raw_body.trim().is_empty() {
            None
        } else {
            match serde_json::from_str(&raw_body) {
                Ok(value) => Some(value),
                Err(e) => {
                    log_debug!(
                        endpoint = %endpoint,
                        error = %e,
                        "Response body is not JSON"
                    );
                    None
                }
            }
        };

        Ok(ApiResponse {
            endpoint,
            status,
            body,
            raw_body,
        })
    }
}

/// Classify a reqwest failure while sending or while reading the body.
fn transport_error(endpoint: Endpoint, error: reqwest::Error) -> ContractError {
    if error.is_timeout() {
        ContractError::timeout(endpoint.to_string())
    } else {
        ContractError::request_failed(
            endpoint.to_string(),
            error.to_string(),
            Some(Box::new(error)),
        )
    }
}

#[async_trait]
impl UserService for ReqresClient {
    async fn list_users(&self, page: u32) -> ContractResult<ApiResponse> {
        self.send::<()>(Endpoint::ListUsers { page }, None).await
    }

    async fn get_user(&self, id: u32) -> ContractResult<ApiResponse> {
        self.send::<()>(Endpoint::GetUser { id }, None).await
    }

    async fn get_unknown(&self, id: u32) -> ContractResult<ApiResponse> {
        self.send::<()>(Endpoint::GetUnknown { id }, None).await
    }

    async fn create_user(&self, payload: &UserPayload) -> ContractResult<ApiResponse> {
        self.send(Endpoint::CreateUser, Some(payload)).await
    }

    async fn update_user(&self, id: u32, payload: &UserPayload) -> ContractResult<ApiResponse> {
        self.send(Endpoint::UpdateUser { id }, Some(payload)).await
    }

    async fn delete_user(&self, id: u32) -> ContractResult<ApiResponse> {
        self.send::<()>(Endpoint::DeleteUser { id }, None).await
    }

    async fn register(&self, credentials: &Credentials) -> ContractResult<ApiResponse> {
        self.send(Endpoint::Register, Some(credentials)).await
    }
}
