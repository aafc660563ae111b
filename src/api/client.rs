//! Registration service HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use crate::config::ApiConfig;

use super::error::ApiError;
use super::types::{ApiResponse, RegistrationRequest};

/// Contract the orchestrator consumes. Implementations own transport,
/// timeouts, and retries; the core only judges the `code` in the envelope.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Ask the service to send an OTP to the given number.
    async fn send_otp(&self, mobile_number: &str) -> Result<ApiResponse, ApiError>;

    /// Verify a previously sent OTP.
    async fn verify_otp(&self, mobile_number: &str, otp: &str) -> Result<ApiResponse, ApiError>;

    /// Submit the completed profile.
    async fn register_account(
        &self,
        request: &RegistrationRequest,
    ) -> Result<ApiResponse, ApiError>;
}

/// `reqwest`-backed implementation of [`RegistrationApi`].
#[derive(Clone)]
pub struct HttpRegistrationApi {
    client: Client,
    base_url: String,
}

impl HttpRegistrationApi {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        debug!(%request_id, path, "registration service call");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("X-Request-Id", &request_id)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let envelope: ApiResponse = serde_json::from_str(&text)?;
        debug!(%request_id, code = envelope.code, "registration service response");
        Ok(envelope)
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationApi {
    async fn send_otp(&self, mobile_number: &str) -> Result<ApiResponse, ApiError> {
        self.post("/otp/send", json!({ "mobileNumber": mobile_number }))
            .await
    }

    async fn verify_otp(&self, mobile_number: &str, otp: &str) -> Result<ApiResponse, ApiError> {
        self.post(
            "/otp/verify",
            json!({ "mobileNumber": mobile_number, "otp": otp }),
        )
        .await
    }

    async fn register_account(
        &self,
        request: &RegistrationRequest,
    ) -> Result<ApiResponse, ApiError> {
        self.post("/accounts/register", serde_json::to_value(request)?)
            .await
    }
}
