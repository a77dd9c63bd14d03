use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Catalog service unreachable: {0}")]
    Transport(String),

    #[error("Malformed catalog response: {0}")]
    Decode(String),

    #[error("Catalog service answered with status {0}")]
    Status(u16),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(feature = "server")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RepositoryError::Status(status.as_u16())
        } else if err.is_timeout() || err.is_connect() || err.is_request() {
            RepositoryError::Transport(err.to_string())
        } else {
            RepositoryError::Unexpected(format!("Unexpected HTTP client error: {err}"))
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}
