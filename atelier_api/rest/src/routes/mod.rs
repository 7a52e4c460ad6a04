use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiFieldError, ApiValidationError};

pub mod contact;
pub mod health;
pub mod quote;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn validation_error(errors: Vec<ApiFieldError>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiValidationError {
            message: "Validation error",
            errors,
        }),
    )
        .into_response()
}

fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { detail })).into_response()
}
