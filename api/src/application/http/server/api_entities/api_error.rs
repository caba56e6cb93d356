use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use virtualfridge_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "E_BAD_REQUEST", message.clone())
            }
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", message.clone())
            }
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, "E_FORBIDDEN", message.clone())
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "E_NOT_FOUND", message.clone()),
            ApiError::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "E_INTERNAL_SERVER_ERROR",
                message.clone(),
            ),
            ApiError::BadGateway(message) => {
                (StatusCode::BAD_GATEWAY, "E_BAD_GATEWAY", message.clone())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let error_response = ErrorResponse {
            code: code.to_string(),
            message,
            status: status.as_u16() as i64,
        };

        let body = serde_json::to_string(&error_response).unwrap_or_else(|_| {
            r#"{"code":"E_INTERNAL_SERVER_ERROR","message":"Failed to serialize error response"}"#
                .to_string()
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(body.clone().into())
            .unwrap_or_else(|_| Response::new(body.into()))
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Invalid => ApiError::BadRequest("Invalid input".to_string()),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
            CoreError::ExternalServiceError(message) => ApiError::BadGateway(message),
        }
    }
}
