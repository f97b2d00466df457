//! Integration tests for the HTTP adapter.
//!
//! These tests drive the router with the real settings, catalog and asset
//! adapters, and verify payload shape, error responses and rate limiting.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use offline_methods_hex::{OfflineMethodsService, inbound::HttpServer};
use offline_methods_repo::{ScopeSettings, ScopedSettings, SnapshotCatalog, StaticAssetResolver};
use offline_methods_types::domain::policy::METHOD_CODE;
use offline_methods_types::{CatalogResponse, StoreId};
use tower::ServiceExt;

type Server = HttpServer<ScopedSettings, SnapshotCatalog, StaticAssetResolver>;

fn catalog() -> CatalogResponse {
    serde_json::from_value(serde_json::json!({
        "success": true,
        "response": [
            {
                "id": "paycash",
                "name": "PayCash",
                "thumbnail": "https://img/paycash.gif",
                "payment_type_id": "ticket",
                "status": "active",
                "payment_places": [
                    { "payment_option_id": "7eleven", "name": "7 Eleven", "thumbnail": "https://img/7eleven.png", "status": "active" },
                    { "payment_option_id": "circlek", "name": "Circle K", "thumbnail": "https://img/circlek.png", "status": "inactive" },
                    { "payment_option_id": "soriana", "name": "Soriana", "thumbnail": "https://img/soriana.png", "status": "active" }
                ]
            },
            { "id": "oxxo", "name": "OXXO", "thumbnail": "https://img/oxxo.gif", "payment_type_id": "ticket", "status": "active" },
            { "id": "banamex", "name": "Citibanamex", "payment_type_id": "atm", "status": "active", "payment_places": [] },
            { "id": "visa", "name": "Visa", "payment_type_id": "credit_card", "status": "active" }
        ]
    }))
    .unwrap()
}

/// Store 1 active without exclusions, store 2 excludes two options, store 3 inactive.
fn settings() -> ScopedSettings {
    ScopedSettings::new(ScopeSettings {
        active: Some(true),
        title: Some("Pay in cash".into()),
        name_capture: Some(true),
        document_identification_capture: Some(true),
        expiration_format: Some("dd/MM/yyyy".into()),
        fingerprint_link: Some("https://fp.example.com/fp.js".into()),
        ..Default::default()
    })
    .with_store(
        StoreId::new(2),
        ScopeSettings {
            payment_methods_off_active: Some("oxxo,7eleven".into()),
            ..Default::default()
        },
    )
    .with_store(
        StoreId::new(3),
        ScopeSettings {
            active: Some(false),
            ..Default::default()
        },
    )
}

fn create_test_server(requests_per_minute: u32) -> Server {
    let service = OfflineMethodsService::new(
        settings(),
        SnapshotCatalog::new(catalog())
            .with_store(StoreId::new(4), CatalogResponse::failure("invalid access token")),
        StaticAssetResolver::new(Some("https://cdn.example.com/static".into())),
    );
    HttpServer::with_rate_limit(service, requests_per_minute)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn option_values(options: &serde_json::Value) -> Vec<&str> {
    options
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_checkout_config_active_store() {
    let app = create_test_server(100).router();

    let response = app
        .oneshot(get("/api/stores/1/checkout-config"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let family = &json["payment"][METHOD_CODE];

    assert_eq!(family["isActive"], true);
    assert_eq!(family["title"], "Pay in cash");
    assert_eq!(family["name_capture"], true);
    assert_eq!(family["document_identification_capture"], true);
    assert_eq!(family["expiration"], "dd/MM/yyyy");
    assert_eq!(family["fingerprint"], "https://fp.example.com/fp.js");
    assert_eq!(
        family["logo"]["url"],
        "https://cdn.example.com/static/MercadoPago_PaymentMagento/images/boleto/logo.svg"
    );
    assert_eq!(family["logo"]["title"], "Ticket - MercadoPago");

    assert_eq!(
        option_values(&family["payment_methods_off_active"]),
        vec!["7eleven", "banamex", "oxxo", "soriana"]
    );

    let seven = &family["payment_methods_off_active"][0];
    assert_eq!(seven["label"], "7 Eleven");
    assert_eq!(seven["logo"], "https://img/7eleven.png");
    assert_eq!(seven["payment_method_id"], "paycash");
    assert_eq!(seven["payment_type_id"], "ticket");
    assert_eq!(seven["payment_option_id"], "7eleven");

    let banamex = &family["payment_methods_off_active"][1];
    assert!(banamex.get("payment_option_id").is_none());
    assert!(banamex.get("logo").is_none());
}

#[tokio::test]
async fn test_checkout_config_applies_store_exclusions() {
    let app = create_test_server(100).router();

    let response = app
        .oneshot(get("/api/stores/2/checkout-config"))
        .await
        .unwrap();
    let json = body_json(response).await;

    assert_eq!(
        option_values(&json["payment"][METHOD_CODE]["payment_methods_off_active"]),
        vec!["banamex", "soriana"]
    );
}

#[tokio::test]
async fn test_checkout_config_inactive_store_is_empty_object() {
    let app = create_test_server(100).router();

    let response = app
        .oneshot(get("/api/stores/3/checkout-config"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({}));
}

#[tokio::test]
async fn test_checkout_config_catalog_failure_degrades() {
    let app = create_test_server(100).router();

    let response = app
        .oneshot(get("/api/stores/4/checkout-config"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let family = &json["payment"][METHOD_CODE];
    assert_eq!(family["isActive"], true);
    assert_eq!(family["payment_methods_off_active"], serde_json::json!([]));
}

#[tokio::test]
async fn test_payment_methods_off_endpoint() {
    let app = create_test_server(100).router();

    let response = app
        .clone()
        .oneshot(get("/api/stores/2/payment-methods-off"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        option_values(&body_json(response).await),
        vec!["banamex", "soriana"]
    );

    let response = app
        .oneshot(get("/api/stores/3/payment-methods-off"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_invalid_store_id_is_bad_request() {
    let app = create_test_server(100).router();

    let response = app
        .oneshot(get("/api/stores/default/checkout-config"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["error"].as_str().unwrap().contains("Invalid store ID"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_server(100).router();

    let response = app.oneshot(get("/api/unknown")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], 404);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = create_test_server(100).router();

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]
        .get("/api/stores/{store_id}/checkout-config")
        .is_some());
}

#[tokio::test]
async fn test_rate_limiting_returns_429_when_exceeded() {
    let app = create_test_server(3).router();

    for i in 1..=3 {
        let response = app
            .clone()
            .oneshot(get("/api/stores/1/checkout-config"))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "Request {} should not be rate limited (quota not yet exceeded)",
            i
        );
    }

    let response = app
        .clone()
        .oneshot(get("/api/stores/1/checkout-config"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Rate limit exceeded"));
    assert_eq!(json["retry_after_seconds"], 60);
}

#[tokio::test]
async fn test_rate_limiting_per_client_isolation() {
    let app = create_test_server(1).router();

    let from = |client: &str| {
        Request::builder()
            .uri("/api/stores/1/checkout-config")
            .header("X-Forwarded-For", client)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(from("198.51.100.1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(from("198.51.100.1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = app.clone().oneshot(from("198.51.100.2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rate_limiting_health_endpoint_bypassed() {
    let app = create_test_server(1).router();

    for _ in 0..10 {
        let response = app.clone().oneshot(get("/health")).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::OK,
            "Health endpoint should not be rate limited"
        );
    }
}
