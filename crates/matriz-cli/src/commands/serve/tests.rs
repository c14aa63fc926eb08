use super::*;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use handlers::{handle_health, handle_not_found, handle_qr, handle_rotate};
use handlers::{QrRequest, RotateRequest};

fn test_state() -> SharedState {
    Arc::new(AppState {
        config: ServerConfig::default(),
        // Port 9 (discard) is never listening; the detached stats task
        // fails fast and only logs.
        stats: stats::StatsNotifier::new("http://127.0.0.1:9", None)
            .expect("reqwest client builds without a runtime"),
    })
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body is readable");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

// ------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------

#[test]
fn test_config_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.port, 3001);
    assert_eq!(config.host, "127.0.0.1");
    assert!(config.cors);
    assert!(!config.verbose);
}

#[test]
fn test_bind_addr() {
    let config = ServerConfig::default()
        .with_host("0.0.0.0")
        .with_port(8080);
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
}

// ------------------------------------------------------------------
// Stats notifier
// ------------------------------------------------------------------

#[test]
fn test_notifier_endpoint() {
    let notifier =
        stats::StatsNotifier::new("http://node-api:3002", None).expect("client builds");
    assert_eq!(notifier.endpoint(), "http://node-api:3002/stats");
}

#[test]
fn test_notifier_endpoint_trims_trailing_slash() {
    let notifier =
        stats::StatsNotifier::new("http://node-api:3002/", None).expect("client builds");
    assert_eq!(notifier.endpoint(), "http://node-api:3002/stats");
}

#[test]
fn test_notifier_token_presence() {
    let with = stats::StatsNotifier::new("http://x", Some("secret".to_string()))
        .expect("client builds");
    let without = stats::StatsNotifier::new("http://x", None).expect("client builds");
    assert!(with.has_token());
    assert!(!without.has_token());
}

#[test]
fn test_stats_payload_field_names() {
    let payload = stats::QrStatsPayload {
        q: vec![vec![1.0]],
        r: vec![vec![2.0]],
    };
    let json = serde_json::to_value(&payload).expect("payload serializes");
    assert!(json.get("q").is_some());
    assert!(json.get("r").is_some());
}

// ------------------------------------------------------------------
// Wire types
// ------------------------------------------------------------------

#[test]
fn test_rotate_request_direction_defaults_to_right() {
    let req: RotateRequest =
        serde_json::from_value(serde_json::json!({ "matrix": [[1.0, 2.0]] }))
            .expect("request deserializes without direction");
    assert_eq!(req.direction, "right");
}

#[test]
fn test_rotate_request_explicit_direction() {
    let req: RotateRequest = serde_json::from_value(
        serde_json::json!({ "matrix": [[1.0, 2.0]], "direction": "left" }),
    )
    .expect("request deserializes with direction");
    assert_eq!(req.direction, "left");
}

// ------------------------------------------------------------------
// Handlers
// ------------------------------------------------------------------

#[tokio::test]
async fn test_qr_handler_success() {
    let response = handle_qr(
        axum::extract::State(test_state()),
        Ok(Json(QrRequest {
            matrix: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["q"].as_array().expect("q is an array").len(), 2);
    assert_eq!(body["r"].as_array().expect("r is an array").len(), 2);
}

#[tokio::test]
async fn test_qr_handler_rejects_empty_matrix() {
    let response = handle_qr(
        axum::extract::State(test_state()),
        Ok(Json(QrRequest { matrix: vec![] })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error is a string")
        .contains("empty"));
}

#[tokio::test]
async fn test_qr_handler_rejects_ragged_matrix() {
    let response = handle_qr(
        axum::extract::State(test_state()),
        Ok(Json(QrRequest {
            matrix: vec![vec![1.0, 2.0], vec![3.0]],
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error is a string")
        .contains("rectangular"));
}

#[tokio::test]
async fn test_rotate_handler_right() {
    let response = handle_rotate(
        axum::extract::State(test_state()),
        Ok(Json(RotateRequest {
            matrix: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
            direction: "right".to_string(),
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["rotated"],
        serde_json::json!([[4.0, 1.0], [5.0, 2.0], [6.0, 3.0]])
    );
}

#[tokio::test]
async fn test_rotate_handler_left() {
    let response = handle_rotate(
        axum::extract::State(test_state()),
        Ok(Json(RotateRequest {
            matrix: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
            direction: "left".to_string(),
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["rotated"],
        serde_json::json!([[3.0, 6.0], [2.0, 5.0], [1.0, 4.0]])
    );
}

#[tokio::test]
async fn test_rotate_handler_rejects_bad_direction() {
    let response = handle_rotate(
        axum::extract::State(test_state()),
        Ok(Json(RotateRequest {
            matrix: vec![vec![1.0]],
            direction: "up".to_string(),
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error is a string")
        .contains("'left' or 'right'"));
}

#[tokio::test]
async fn test_health_handler() {
    let response = handle_health().await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "matriz-api");
}

#[tokio::test]
async fn test_not_found_handler_lists_routes() {
    let response = handle_not_found().await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Endpoint not found");
    assert_eq!(
        body["routes"].as_array().expect("routes is an array").len(),
        routes::ROUTES.len()
    );
}
