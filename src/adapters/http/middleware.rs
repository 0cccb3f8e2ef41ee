use std::any::Any;

use axum::{
    extract::{Request, State},
    http::{
        self, HeaderValue,
        header::{CONTENT_TYPE, ORIGIN},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{adapters::http::app_state::AppState, app_error::AppError};

/// Catch-all boundary for panics escaping a handler.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(detail).into_response()
}

/// Rejects requests carrying an `Origin` outside the allow-list before they
/// reach routing. Requests without an `Origin` header pass.
pub async fn origin_guard(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = request.headers().get(ORIGIN) {
        if !app_state.config.cors_origins.iter().any(|o| o == origin) {
            tracing::warn!(origin = ?origin, "CORS blocked origin");
            return Err(AppError::Internal("origin not allowed by CORS".into()));
        }
    }

    Ok(next.run(request).await)
}

/// CORS headers for the browser frontends on the allow-list.
pub fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
