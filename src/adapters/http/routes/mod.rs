pub mod health;
pub mod waitlist;

use axum::{Router, http::StatusCode, response::Response};

use crate::adapters::http::{app_error_impl::error_resp, app_state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(waitlist::router())
        .method_not_allowed_fallback(method_not_allowed)
}

pub async fn not_found() -> Response {
    error_resp(StatusCode::NOT_FOUND, "Not found.")
}

pub async fn method_not_allowed() -> Response {
    error_resp(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
}
