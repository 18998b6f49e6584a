/// Errors surfaced by [`crate::api::ApiClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{kind} ({status}): {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },
    #[error("could not read upload: {0}")]
    Upload(#[from] std::io::Error),
}

impl ClientError {
    /// HTTP status of a service error response, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Upload(_) => None,
        }
    }

    /// Service message for an API error, e.g. `"food not found"`.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
