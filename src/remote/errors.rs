use thiserror::Error;

/// Failure of a call to the shop API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure, timeout or non-success HTTP status.
    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from the shop API: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        FetchError::Transport {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        FetchError::Transport {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        FetchError::Parse(message.into())
    }

    /// HTTP status of the failed call, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Transport { status, .. } => *status,
            FetchError::Parse(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
