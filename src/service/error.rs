//! Error taxonomy for outbound service calls

use thiserror::Error;

/// Why an outbound call did not succeed.
///
/// Both variants are caught at the submission controller boundary and
/// converted into a user-visible failure notification; neither crashes
/// the form instance.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The call itself could not be completed (network/transport fault)
    #[error("request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The call completed but the service signaled a non-success outcome
    #[error("service rejected the request (status {status})")]
    Rejection { status: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let err = ServiceError::Rejection { status: 422 };
        assert_eq!(
            err.to_string(),
            "service rejected the request (status 422)"
        );
    }
}
