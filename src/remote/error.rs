use std::path::PathBuf;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failures from a single API call. Callers never see partial success.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{endpoint}: request failed: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    /// Non-2xx response; `body` is the raw response text.
    #[error("API {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("{endpoint}: failed to parse response: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("read evidence file {}: {source}", path.display())]
    Evidence {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
