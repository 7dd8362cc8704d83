//! External service clients for the Prep backend

mod client;
mod error;
mod traits;

pub use client::{HttpAuthClient, HttpQuestionClient};
pub use error::ServiceError;
pub use traits::{AuthApi, GenerateRequest, QuestionApi};

#[cfg(test)]
pub use traits::{MockAuthApi, MockQuestionApi};
