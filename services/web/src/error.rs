//! Custom error types for the web service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use client::ClientError;

/// Custom error type for the web service
#[derive(Error, Debug)]
pub enum WebError {
    /// Error bubbled up from the backend client
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Client(err) => {
                let status = match &err {
                    ClientError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                    ClientError::Auth => StatusCode::UNAUTHORIZED,
                    ClientError::NotFound => StatusCode::NOT_FOUND,
                    ClientError::Backend { status, .. } => StatusCode::from_u16(*status)
                        .unwrap_or(StatusCode::BAD_GATEWAY),
                    ClientError::Network(_) | ClientError::Decode(_) => StatusCode::BAD_GATEWAY,
                };

                let field = match &err {
                    ClientError::Validation { field, .. } => Some(field.as_str()),
                    _ => err.field_hint(),
                };
                let body = Json(json!({
                    "error": err.user_message(),
                    "field": field,
                }));

                (status, body).into_response()
            }
        }
    }
}

/// Type alias for web handler results
pub type WebResult<T> = Result<T, WebError>;
