use shared::error::{ApiError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        source: reqwest::Error,
    },
    #[error("{path} responded with HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("malformed response from {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
    #[error("no content for {0}")]
    NotFound(String),
}

impl ClientError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidBaseUrl { .. } | Self::Decode { .. } => ErrorCode::Validation,
            Self::Transport { .. } => ErrorCode::Unavailable,
            Self::Status { status, .. } => ErrorCode::from_status(*status),
            Self::NotFound(_) => ErrorCode::NotFound,
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        ApiError::new(self.code(), self.to_string())
    }
}

impl From<ClientError> for ApiError {
    fn from(value: ClientError) -> Self {
        value.to_api_error()
    }
}
