use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by the request gateway.
///
/// `Transport` covers requests that never produced an HTTP response,
/// including client-side construction failures such as missing
/// credentials. `Status` carries everything known about a non-2xx
/// response: the route, the raw body text and the parsed JSON body when
/// the text was valid JSON. `Schema` is a 2xx response whose body did not
/// match the expected shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("[{route}] {message}")]
    Transport { route: String, message: String },

    #[error("[{route}] received {status}. Body: {text}")]
    Status {
        route: String,
        status: u16,
        text: String,
        body: Option<serde_json::Value>,
    },

    #[error("[{route}] malformed response: {message}")]
    Schema { route: String, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error string suitable for display: the backend's `{ "error": ... }`
    /// envelope when present, the full message otherwise.
    pub fn message(&self) -> String {
        if let ApiError::Status {
            body: Some(body), ..
        } = self
        {
            if let Ok(envelope) = serde_json::from_value::<ErrorDto>(body.clone()) {
                return envelope.error;
            }
        }
        self.to_string()
    }
}
