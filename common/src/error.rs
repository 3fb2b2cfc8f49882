use thiserror::Error;

/// Failure of a round trip to one of the dashboard endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable body (network error, non-JSON body).
    #[error("Server Error: {0}")]
    Transport(String),
    /// The body was JSON but did not follow the `success` envelope.
    #[error("Server Error: Incorrect response format.")]
    Malformed,
    /// The server answered `success: false`, optionally with a message.
    #[error("{}", .0.as_deref().unwrap_or("Server Error: Incorrect response format."))]
    Rejected(Option<String>),
}

impl ApiError {
    /// Whether the failure is reported through a blocking alert rather than
    /// the inline error region of the flow that issued the request.
    pub fn is_alert(&self) -> bool {
        !matches!(self, ApiError::Rejected(Some(_)))
    }

    /// Message for the inline error region, if the server supplied one.
    pub fn inline_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(Some(message)) => Some(message),
            _ => None,
        }
    }
}
