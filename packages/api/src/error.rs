use store::ClientError;
use thiserror::Error;

/// Errors raised while talking to the remote API.
///
/// The stores consume the reduced [`ClientError`] form; this type exists so
/// the reqwest source is preserved for logging at the transport boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http(e) if e.is_decode() => ClientError::Decode(e.to_string()),
            ApiError::Http(e) => ClientError::Transport(e.to_string()),
            ApiError::Status(code) => ClientError::Status(code),
            ApiError::Decode(message) => ClientError::Decode(message),
        }
    }
}
