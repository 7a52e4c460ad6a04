use std::sync::Arc;

use atelier_core_contact_contracts::{
    ContactFeatureService, ContactMarkReadError, ContactSubmitError,
};
use atelier_models::contact::ContactMessageId;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};

use super::{error, internal_server_error, validation_error};
use crate::models::{
    contact::{ApiContactMessage, ApiContactSubmission},
    ApiDataResponse, ApiMessageResponse,
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .route("/api/contact/messages", routing::get(list_messages))
        .route(
            "/api/contact/messages/:message_id/read",
            routing::patch(mark_read),
        )
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Json(submission): Json<ApiContactSubmission>,
) -> Response {
    let submission = match submission.validate() {
        Ok(submission) => submission,
        Err(errors) => return validation_error(errors),
    };

    match service.submit(submission).await {
        Ok(message) => (
            StatusCode::CREATED,
            Json(ApiMessageResponse {
                message: "Contact message received successfully",
                data: ApiContactMessage::from(message),
            }),
        )
            .into_response(),
        Err(ContactSubmitError::Notify) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not deliver the notification email",
        ),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

async fn list_messages(service: State<Arc<impl ContactFeatureService>>) -> Response {
    match service.list_messages().await {
        Ok(messages) => Json(ApiDataResponse {
            data: messages
                .into_iter()
                .map(ApiContactMessage::from)
                .collect::<Vec<_>>(),
        })
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn mark_read(
    service: State<Arc<impl ContactFeatureService>>,
    message_id: Result<Path<ContactMessageId>, PathRejection>,
) -> Response {
    let Ok(Path(message_id)) = message_id else {
        return error(StatusCode::BAD_REQUEST, "Invalid message ID");
    };

    match service.mark_read(message_id).await {
        Ok(message) => Json(ApiMessageResponse {
            message: "Message marked as read",
            data: ApiContactMessage::from(message),
        })
        .into_response(),
        Err(ContactMarkReadError::NotFound) => error(StatusCode::NOT_FOUND, "Message not found"),
        Err(ContactMarkReadError::Other(err)) => internal_server_error(err),
    }
}
