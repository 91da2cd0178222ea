use crate::domain::ValidationError;
use crate::retry_policy::Retryable;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no result found for '{0}'")]
    NotFound(String),
    #[error("no route found: {0}")]
    NoRoute(String),
    #[error("{provider} responded with status {status}")]
    Status { provider: &'static str, status: StatusCode },
    #[error("malformed {provider} response: {reason}")]
    MalformedResponse { provider: &'static str, reason: String },
    #[error("invalid {provider} url: {reason}")]
    InvalidUrl { provider: &'static str, reason: String },
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider did not answer within {0:?}")]
    DeadlineExceeded(Duration),
}

impl ProviderError {
    /// Whether the failure comes from the provider rather than from the query itself.
    pub fn is_external_service(&self) -> bool {
        !matches!(self, ProviderError::Validation(_) | ProviderError::NotFound(_))
    }
}

impl Retryable for ProviderError {
    fn is_transient(&self) -> bool {
        match self {
            ProviderError::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS || *status == StatusCode::REQUEST_TIMEOUT
            }
            ProviderError::Request(error) => !error.is_builder() && !error.is_decode(),
            ProviderError::Validation(_)
            | ProviderError::NotFound(_)
            | ProviderError::NoRoute(_)
            | ProviderError::MalformedResponse { .. }
            | ProviderError::InvalidUrl { .. }
            | ProviderError::DeadlineExceeded(_) => false,
        }
    }

    fn deadline_exceeded(deadline: Duration) -> Self {
        ProviderError::DeadlineExceeded(deadline)
    }
}
