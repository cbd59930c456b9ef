//! Tests de la API HTTP
//!
//! Smoke tests del router completo sobre SQLite en memoria: mapeo de errores
//! de dominio a status codes y forma de las respuestas JSON.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tower::ServiceExt;

use autogo_backend::config::EnvironmentConfig;
use autogo_backend::database::{evolution, schema};
use autogo_backend::routes::create_app_router;
use autogo_backend::state::AppState;

async fn create_test_app() -> Router {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    schema::create_base_tables(&pool).await.unwrap();
    evolution::reconcile(&pool).await;

    let config = EnvironmentConfig {
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    create_app_router(AppState::new(pool, config))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn demo_vehicle(vin: &str) -> Value {
    json!({
        "vin": vin,
        "brand": "Toyota",
        "model": "Corolla",
        "year": 2018,
        "odometer_km": 65432,
        "acquisition_type": "DIRECT_SALE",
        "seller_name": "Demo Seller"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["service"], "autogo-backend");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_and_get_vehicle() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/vehicles", demo_vehicle("1HGCM82633A004352")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["vin"], "1HGCM82633A004352");
    assert_eq!(body["data"]["status"], "AVAILABLE");

    let id = body["data"]["id"].as_i64().unwrap();
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/vehicles/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_request("/api/vehicles/9999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_vin_maps_to_conflict() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/vehicles", demo_vehicle("1HGCM82633A004352")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request("POST", "/api/vehicles", demo_vehicle("1HGCM82633A004352")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_sale_and_payment_flow_over_http() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/vehicles", demo_vehicle("1HGCM82633A004352")))
        .await
        .unwrap();
    let vehicle = response_json(response).await;
    let vehicle_id = vehicle["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/sales",
            json!({ "vehicle_id": vehicle_id, "sale_price": 10000.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let sale = response_json(response).await;
    let sale_id = sale["data"]["id"].as_i64().unwrap();
    assert_eq!(sale["data"]["status"], "OPEN");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/sales/{}/payments", sale_id),
            json!({ "amount": 10000.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let applied = response_json(response).await;
    assert_eq!(applied["sale"]["status"], "PAID");

    // Sobrepago: 400 con código OVERPAYMENT
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/sales/{}/payments", sale_id),
            json!({ "amount": 1.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["code"], "OVERPAYMENT");

    // El vehículo quedó SOLD
    let response = app
        .oneshot(get_request(&format!("/api/vehicles/{}", vehicle_id)))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["status"], "SOLD");
}

#[tokio::test]
async fn test_negative_cost_maps_to_bad_request() {
    let app = create_test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/costs",
            json!({ "cost_type": "repair", "amount": -5.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_vehicle_returns_no_content() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/vehicles", demo_vehicle("1HGCM82633A004352")))
        .await
        .unwrap();
    let body = response_json(response).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/vehicles/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get_request(&format!("/api/vehicles/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
