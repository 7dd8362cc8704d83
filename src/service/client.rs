//! HTTP clients for the Prep backend
//!
//! Concrete implementations of the service traits. Base address comes
//! from `PREP_API_ADDRESS`, then the user config, then a local default.

use super::error::ServiceError;
use super::traits::{AuthApi, GenerateRequest, QuestionApi};
use crate::config::ClientConfig;
use crate::state::Identity;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default backend address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn resolve_address(config: &ClientConfig) -> String {
    std::env::var("PREP_API_ADDRESS")
        .ok()
        .or_else(|| config.api_address.clone())
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
}

fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let timeout = config.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()?)
}

/// Response body of the generate endpoint; only the success flag is read
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    success: bool,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the question-generation endpoint
pub struct HttpQuestionClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuestionClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
            base_url: resolve_address(config),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl QuestionApi for HttpQuestionClient {
    async fn generate_questions(
        &mut self,
        request: &GenerateRequest,
    ) -> Result<(), ServiceError> {
        let url = format!(
            "{}/api/interviews/generate",
            self.base_url.trim_end_matches('/')
        );
        tracing::debug!(url = %url, amount = request.amount, "sending question generation request");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "question generation rejected");
            return Err(ServiceError::Rejection {
                status: status.as_u16(),
            });
        }

        let body: GenerateResponse = response.json().await?;
        if !body.success {
            tracing::warn!(status = %status, "question generation reported failure");
            return Err(ServiceError::Rejection {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Client for the authentication backend
pub struct HttpAuthClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
            base_url: resolve_address(config),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl AuthApi for HttpAuthClient {
    async fn current_identity(&mut self) -> Result<Option<Identity>, ServiceError> {
        let response = self.client.get(self.url("/api/auth/me")).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::NOT_FOUND
        {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ServiceError::Rejection {
                status: status.as_u16(),
            });
        }
        let identity: Identity = response.json().await?;
        Ok(Some(identity))
    }

    async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        tracing::debug!(email = %email, "issuing credential");
        let response = self
            .client
            .post(self.url("/api/auth/sign-up"))
            .json(&SignUpBody {
                name,
                email,
                password,
            })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "sign-up rejected");
            return Err(ServiceError::Rejection {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), ServiceError> {
        tracing::debug!(email = %email, "validating credential");
        let response = self
            .client
            .post(self.url("/api/auth/sign-in"))
            .json(&SignInBody { email, password })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "sign-in rejected");
            return Err(ServiceError::Rejection {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
