use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_helpers::AppError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum PersonError {
    #[error("The minimum required age is {}.", crate::service::MINIMUM_AGE)]
    Underage,

    #[error("The email address: {0} is already in use.")]
    DuplicateEmail(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PersonResult<T> = Result<T, PersonError>;

/// Error body returned when a person cannot be created.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreationErrorResponse {
    pub error_message: String,
    pub exception_reason: String,
}

impl IntoResponse for PersonError {
    fn into_response(self) -> Response {
        match self {
            // Input-caused, recoverable: always a client error, with the
            // domain message carried as the exception reason.
            PersonError::Underage | PersonError::DuplicateEmail(_) => {
                let body = CreationErrorResponse {
                    error_message: "Person could not be created!".to_string(),
                    exception_reason: self.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            PersonError::Internal(msg) => AppError::InternalServerError(msg).into_response(),
        }
    }
}
