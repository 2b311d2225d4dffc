//! Error types for the gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Gateway errors
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request did not declare a JSON body
    #[error("Invalid `Content-Type` header. Expected `application/json`")]
    InvalidContentType,

    /// Request body could not be decoded
    #[error("failed to read request body: {0}")]
    InvalidBody(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    /// HTTP status reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidContentType | GatewayError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::Config(_) | GatewayError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::InvalidBody(err.to_string())
    }
}

impl From<settlement::Error> for GatewayError {
    fn from(err: settlement::Error) -> Self {
        GatewayError::InvalidBody(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, "{}", self);
        } else {
            tracing::warn!(%status, "Rejected request: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_bad_request() {
        assert_eq!(
            GatewayError::InvalidContentType.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::InvalidBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_server_errors() {
        let err = GatewayError::Config("missing bind address".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_decode_error_message() {
        let err: GatewayError = serde_json::from_str::<Vec<u32>>("{}").unwrap_err().into();
        assert!(err.to_string().starts_with("failed to read request body: "));
    }

    #[test]
    fn test_overflowing_ledger_is_bad_request() {
        let err: GatewayError =
            settlement::Error::AmountOverflow(settlement::ParticipantId::new("A")).into();
        assert!(matches!(err, GatewayError::InvalidBody(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
