//! Trait abstraction for backend clients to enable mocking in tests

use super::error::ServiceError;
use crate::state::Identity;
use async_trait::async_trait;
use serde::Serialize;

/// Request body for the question-generation endpoint.
///
/// Explicitly shaped to the fields the backend reads; nothing else is
/// sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub interview_type: String,
    pub role: String,
    pub level: String,
    pub techstack: String,
    pub amount: u32,
    pub userid: String,
}

/// Operations exposed by the authentication collaborator.
///
/// Treated as opaque remote calls with a success/failure outcome and no
/// other observable contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Fetch the currently signed-in identity, if any
    async fn current_identity(&mut self) -> Result<Option<Identity>, ServiceError>;

    /// Issue a credential for a new account
    async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ServiceError>;

    /// Validate an existing credential
    async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), ServiceError>;
}

/// Operations exposed by the question-generation collaborator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionApi: Send + Sync {
    /// Ask the backend to generate interview questions.
    ///
    /// The only consumed response signal is success or failure.
    async fn generate_questions(&mut self, request: &GenerateRequest)
        -> Result<(), ServiceError>;
}
