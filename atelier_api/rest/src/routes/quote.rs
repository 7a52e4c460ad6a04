use std::sync::Arc;

use atelier_core_quote_contracts::{QuoteFeatureService, QuoteRequestError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};

use super::{error, internal_server_error, validation_error};
use crate::models::quote::{ApiQuoteAccepted, ApiQuoteRequest};

pub fn router(service: Arc<impl QuoteFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/quote", routing::post(request_quote))
        .with_state(service)
}

async fn request_quote(
    service: State<Arc<impl QuoteFeatureService>>,
    Json(request): Json<ApiQuoteRequest>,
) -> Response {
    let request = match request.validate() {
        Ok(request) => request,
        Err(errors) => return validation_error(errors),
    };

    match service.request_quote(request).await {
        Ok(()) => Json(ApiQuoteAccepted {
            success: true,
            message: "Quote request submitted successfully",
        })
        .into_response(),
        Err(QuoteRequestError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
        }
        Err(QuoteRequestError::Other(err)) => internal_server_error(err),
    }
}
