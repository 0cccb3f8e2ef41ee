use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::validators::email_from_payload,
};

#[derive(Serialize)]
struct JoinResponse {
    message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join))
}

async fn join(
    State(app_state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // A body that is not JSON at all is reported the same way as a bad address.
    let Json(payload) = payload.map_err(|rejection| {
        tracing::info!(error = %rejection, "Unreadable waitlist payload");
        AppError::InvalidEmail
    })?;
    tracing::debug!(payload = %payload, "Received waitlist request");

    let email = email_from_payload(&payload)?;
    app_state.waitlist_use_cases.join(email).await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinResponse {
            message: "Email added to waitlist!",
        }),
    ))
}
