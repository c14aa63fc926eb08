//! Router construction and CORS middleware.

use super::{handlers, SharedState};
use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

/// Routes exposed by the server, as listed in the 404 fallback payload.
pub(crate) const ROUTES: [&str; 3] = ["POST /qr", "POST /rotate", "GET /health"];

/// Build the axum Router for the matrix API.
pub(crate) fn build_router(state: SharedState) -> Router {
    let cors = state.config.cors;

    let router = Router::new()
        .route("/qr", post(handlers::handle_qr))
        .route("/rotate", post(handlers::handle_rotate))
        .route("/health", get(handlers::handle_health))
        .fallback(handlers::handle_not_found)
        .with_state(state);

    if cors {
        router.layer(middleware::from_fn(cors_headers))
    } else {
        router
    }
}

/// Permissive CORS: answer preflight requests directly and stamp the
/// allow-origin headers on every response.
async fn cors_headers(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );

    response
}
