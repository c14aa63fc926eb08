//! Request handlers for the matrix API.
//!
//! Wire contract: bodies carry a `matrix` field (rows of numbers); rotation
//! accepts an optional `direction` defaulting to "right" here, never in the
//! core. Validation failures return 400 with `{"error": <message>}`.

use super::{routes, stats, SharedState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use colored::Colorize;
use matriz::analysis;
use matriz::decomposition::householder;
use matriz::primitives::Matrix;
use matriz::rotation::{rotate, Direction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct QrRequest {
    pub matrix: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RotateRequest {
    pub matrix: Vec<Vec<f64>>,
    #[serde(default = "default_direction")]
    pub direction: String,
}

fn default_direction() -> String {
    Direction::Right.as_str().to_string()
}

#[derive(Debug, Serialize)]
pub(crate) struct QrResponse {
    pub q: Vec<Vec<f64>>,
    pub r: Vec<Vec<f64>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RotateResponse {
    pub rotated: Vec<Vec<f64>>,
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message.into() })),
    )
        .into_response()
}

/// POST /qr
pub(crate) async fn handle_qr(
    State(state): State<SharedState>,
    payload: Result<Json<QrRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(_) => return bad_request("Invalid JSON format"),
    };

    let matrix = match Matrix::from_rows(&req.matrix) {
        Ok(m) => m,
        Err(e) => return bad_request(e.to_string()),
    };

    let qr = householder(&matrix);
    let response = QrResponse {
        q: qr.q().to_rows(),
        r: qr.r().to_rows(),
    };

    if state.config.verbose {
        println!(
            "{}",
            format!(
                "QR factorization completed for {} matrix",
                analysis::dimensions(&matrix)
            )
            .green()
        );
    }

    // Best-effort sidecar notification. The response below is already
    // decided; a downstream failure only produces a warning log.
    let notifier = state.stats.clone();
    let stats_payload = stats::QrStatsPayload {
        q: response.q.clone(),
        r: response.r.clone(),
    };
    tokio::spawn(async move {
        notifier.send_qr(&stats_payload).await;
    });

    Json(response).into_response()
}

/// POST /rotate
pub(crate) async fn handle_rotate(
    State(state): State<SharedState>,
    payload: Result<Json<RotateRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(_) => return bad_request("Invalid JSON format"),
    };

    let direction = match req.direction.parse::<Direction>() {
        Ok(d) => d,
        Err(e) => return bad_request(e.to_string()),
    };

    let matrix = match Matrix::from_rows(&req.matrix) {
        Ok(m) => m,
        Err(e) => return bad_request(e.to_string()),
    };

    let rotated = rotate(&matrix, direction);

    if state.config.verbose {
        println!(
            "{}",
            format!(
                "Matrix rotated {}: {} -> {}",
                direction,
                analysis::dimensions(&matrix),
                analysis::dimensions(&rotated)
            )
            .green()
        );
    }

    // Rotation results are never forwarded to node-api.
    Json(RotateResponse {
        rotated: rotated.to_rows(),
    })
    .into_response()
}

/// GET /health
pub(crate) async fn handle_health() -> Response {
    Json(serde_json::json!({ "status": "ok", "service": "matriz-api" })).into_response()
}

/// Fallback for unknown paths.
pub(crate) async fn handle_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Endpoint not found",
            "routes": routes::ROUTES,
        })),
    )
        .into_response()
}
