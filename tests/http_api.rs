//! Integration tests for the kiosk HTTP API.
//!
//! Drives the assembled router with `tower::ServiceExt::oneshot` against
//! in-memory adapters and checks status codes and JSON bodies end to end.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use aeb_configurator::adapters::blob::InMemoryBlobStore;
use aeb_configurator::adapters::http::{api_router, ApiServices};
use aeb_configurator::adapters::random::FixedRandomSource;
use aeb_configurator::adapters::storage::InMemoryKeyValueStore;
use aeb_configurator::application::KioskState;
use aeb_configurator::domain::pricing::PricingEngine;
use aeb_configurator::domain::promotion::PrizeWheel;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    blobs: InMemoryBlobStore,
}

fn test_app_with(blobs: InMemoryBlobStore, samples: Vec<f64>) -> TestApp {
    let services = ApiServices {
        kiosk: KioskState::new(Arc::new(InMemoryKeyValueStore::new())),
        engine: Arc::new(PricingEngine::standard()),
        wheel: Arc::new(PrizeWheel::default()),
        random: Arc::new(FixedRandomSource::new(samples)),
        blob_store: Arc::new(blobs.clone()),
        max_upload_bytes: 1024,
    };
    TestApp {
        router: api_router(services),
        blobs,
    }
}

fn test_app() -> TestApp {
    test_app_with(InMemoryBlobStore::new("https://blob.test"), vec![0.0])
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }

    async fn json(&self, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn upload(&self, method: Method, uri: &str, bytes: &'static [u8]) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/pdf")
            .body(Body::from(bytes))
            .unwrap();
        self.send(request).await
    }
}

fn oil_300(material: &str) -> Value {
    json!({
        "type": "oil",
        "power": 300,
        "material": material,
        "factorK": "K1",
        "inputVoltage": "15kV",
        "oilType": "mineral"
    })
}

// =============================================================================
// Health and upload relay
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = app.get("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn upload_returns_blob_metadata() {
    let app = test_app();
    let (status, body) = app
        .upload(Method::POST, "/api/create-pdf-link?filename=orcamento.pdf", b"%PDF-1.4")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://blob.test/orcamento.pdf");
    assert_eq!(body["pathname"], "orcamento.pdf");
    assert_eq!(body["contentType"], "application/pdf");
    assert!(body["downloadUrl"].as_str().is_some());
    assert_eq!(app.blobs.get("orcamento.pdf").await.unwrap(), b"%PDF-1.4".to_vec());
}

#[tokio::test]
async fn upload_alias_uses_default_filename() {
    let app = test_app();
    let (status, body) = app.upload(Method::POST, "/api/upload-pdf", b"%PDF").await;

    assert_eq!(status, StatusCode::OK);
    let pathname = body["pathname"].as_str().unwrap();
    assert!(pathname.starts_with("orcamento-aeb-"));
    assert!(pathname.ends_with(".pdf"));
}

#[tokio::test]
async fn upload_with_empty_body_is_bad_request() {
    let app = test_app();
    let (status, body) = app.upload(Method::POST, "/api/create-pdf-link", b"").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
    assert!(body["details"].as_str().is_some());
    assert_eq!(app.blobs.count().await, 0);
}

#[tokio::test]
async fn upload_with_traversal_filename_is_bad_request() {
    let app = test_app();
    let (status, _) = app
        .upload(Method::POST, "/api/create-pdf-link?filename=../x.pdf", b"%PDF")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_with_url_delimiters_in_filename_is_bad_request() {
    let app = test_app();
    let (status, body) = app
        .upload(
            Method::POST,
            "/api/create-pdf-link?filename=orcamento%3Fcliente%231.pdf",
            b"%PDF",
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().contains("orcamento?cliente#1.pdf"));
    assert_eq!(app.blobs.count().await, 0);
}

#[tokio::test]
async fn upload_rejects_other_methods() {
    let app = test_app();
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let (status, body) = app.upload(method, "/api/create-pdf-link", b"").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({ "error": "Method Not Allowed" }));
    }
}

#[tokio::test]
async fn upload_store_failure_is_internal_error() {
    let app = test_app_with(InMemoryBlobStore::failing("blob offline"), vec![0.0]);
    let (status, body) = app.upload(Method::POST, "/api/create-pdf-link", b"%PDF").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["details"].as_str().unwrap().contains("blob offline"));
}

#[tokio::test]
async fn upload_over_limit_is_rejected() {
    let app = test_app();
    let (status, body) = app
        .upload(Method::POST, "/api/create-pdf-link", &[b'x'; 2048])
        .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Arquivo PDF muito grande.");
    assert!(body["details"].is_string());
    assert_eq!(app.blobs.count().await, 0);
}

#[tokio::test]
async fn upload_with_malformed_query_is_json_bad_request() {
    let app = test_app();
    let (status, body) = app
        .upload(
            Method::POST,
            "/api/create-pdf-link?filename=a.pdf&filename=b.pdf",
            b"%PDF-1.4",
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Parâmetros inválidos.");
    assert!(body["details"].as_str().unwrap().contains("filename"));
    assert_eq!(app.blobs.count().await, 0);
}

// =============================================================================
// Pricing
// =============================================================================

#[tokio::test]
async fn quote_applies_surcharges() {
    let app = test_app();
    let (status, body) = app
        .json(Method::POST, "/api/pricing/quote", oil_300("copper"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["basePrice"], 37_600);
    assert_eq!(body["finalPrice"], 50_760);
    assert_eq!(body["appliedSurcharges"], json!(["copper_winding"]));
    assert_eq!(body["seed"], "oil-300-copper-K1");
    assert!(body["comparison"]["competitorA"].as_u64().is_some());
}

#[tokio::test]
async fn quote_for_unlisted_power_is_unprocessable() {
    let app = test_app();
    let mut config = oil_300("aluminum");
    config["power"] = json!(2750);

    let (status, body) = app.json(Method::POST, "/api/pricing/quote", config).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorCode"], "UNPRICED_CONFIGURATION");
}

#[tokio::test]
async fn competitors_are_deterministic() {
    let app = test_app();
    let request = json!({ "price": 37_600, "seed": "oil-300-aluminum-K1" });

    let (status, body) = app
        .json(Method::POST, "/api/pricing/competitors", request.clone())
        .await;
    let (_, again) = app.json(Method::POST, "/api/pricing/competitors", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, again);
    assert_eq!(body["competitorA"], 45_316);
    assert_eq!(body["competitorB"], 41_640);
    assert_eq!(body["savings"], 5_878.0);
}

// =============================================================================
// Cart and quotation
// =============================================================================

#[tokio::test]
async fn cart_lifecycle() {
    let app = test_app();

    let (status, body) = app.get("/api/cart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 0);

    let (status, body) = app
        .json(Method::POST, "/api/cart/items", oil_300("aluminum"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["item"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["item"]["finalPrice"], 37_600);
    assert_eq!(body["cart"]["totalPrice"], 37_600);

    let (status, body) = app
        .json(Method::PUT, &format!("/api/cart/items/{id}"), json!({ "quantity": 3 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], false);
    assert_eq!(body["cart"]["totalItems"], 3);
    assert_eq!(body["cart"]["totalPrice"], 112_800);

    let (status, body) = app
        .json(Method::PUT, &format!("/api/cart/items/{id}"), json!({ "quantity": 0 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], true);
    assert_eq!(body["cart"]["totalItems"], 0);
}

#[tokio::test]
async fn adding_unpriced_configuration_is_unprocessable() {
    let app = test_app();
    let mut config = oil_300("aluminum");
    config["power"] = json!(15);

    let (status, body) = app.json(Method::POST, "/api/cart/items", config).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorCode"], "UNPRICED_CONFIGURATION");

    let (_, cart) = app.get("/api/cart").await;
    assert_eq!(cart["totalItems"], 0);
}

#[tokio::test]
async fn remove_and_clear() {
    let app = test_app();
    let (_, first) = app
        .json(Method::POST, "/api/cart/items", oil_300("aluminum"))
        .await;
    app.json(Method::POST, "/api/cart/items", oil_300("copper"))
        .await;
    let id = first["item"]["id"].as_str().unwrap();

    let (status, body) = app.delete(&format!("/api/cart/items/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    let (status, _) = app.delete(&format!("/api/cart/items/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/cart").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, cart) = app.get("/api/cart").await;
    assert_eq!(cart["totalItems"], 0);
}

#[tokio::test]
async fn malformed_item_id_is_bad_request() {
    let app = test_app();
    let (status, body) = app.delete("/api/cart/items/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "INVALID_ITEM_ID");
}

#[tokio::test]
async fn quotation_requires_items() {
    let app = test_app();
    let (status, body) = app.get("/api/quotation").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["errorCode"], "CART_EMPTY");

    app.json(Method::POST, "/api/cart/items", oil_300("aluminum"))
        .await;
    let (status, body) = app.get("/api/quotation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPrice"], 37_600);
    assert_eq!(body["comparison"]["competitorA"], 45_316);
}

// =============================================================================
// Promotion
// =============================================================================

#[tokio::test]
async fn prize_list_depends_on_order_value() {
    let app = test_app();

    let (status, small) = app.get("/api/promotion/prizes?orderValue=37600").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(small["bonusEligible"], true);
    assert_eq!(small["prizes"].as_array().unwrap().len(), 9);

    let (_, large) = app.get("/api/promotion/prizes?orderValue=150000").await;
    assert_eq!(large["bonusEligible"], false);
    assert_eq!(large["prizes"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn draw_counts_the_quotation() {
    let app = test_app();

    let (_, before) = app.get("/api/promotion/quotation-count").await;
    assert_eq!(before["count"], 30);

    app.json(Method::POST, "/api/cart/items", oil_300("aluminum"))
        .await;
    let (status, body) = app
        .json(
            Method::POST,
            "/api/promotion/draw",
            json!({ "phone": "(11) 98765-4321" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderValue"], 37_600);
    assert_eq!(body["index"], 0);
    assert_eq!(body["prize"]["name"], "2% de Desconto");
    assert_eq!(body["quotationCount"], 31);

    let (_, after) = app.get("/api/promotion/quotation-count").await;
    assert_eq!(after["count"], 31);
}

#[tokio::test]
async fn draw_with_empty_cart_is_conflict() {
    let app = test_app();
    let (status, body) = app
        .json(
            Method::POST,
            "/api/promotion/draw",
            json!({ "phone": "(11) 98765-4321" }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["errorCode"], "CART_EMPTY");

    let (_, count) = app.get("/api/promotion/quotation-count").await;
    assert_eq!(count["count"], 30);
}

#[tokio::test]
async fn draw_ignores_client_order_value() {
    let app = test_app_with(InMemoryBlobStore::new("https://blob.test"), vec![0.999_9]);
    let mut config = oil_300("aluminum");
    config["power"] = json!(3000);
    let (status, _) = app.json(Method::POST, "/api/cart/items", config).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .json(
            Method::POST,
            "/api/promotion/draw",
            json!({ "phone": "11987654321", "orderValue": 1000 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderValue"], 265_000);
    assert_eq!(body["prize"]["name"], "Caderno");
    assert_eq!(body["index"], 7);
}

#[tokio::test]
async fn draw_with_invalid_phone_is_rejected_without_counting() {
    let app = test_app();
    let (status, body) = app
        .json(
            Method::POST,
            "/api/promotion/draw",
            json!({ "phone": "123", "orderValue": 37600 }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "INVALID_PHONE");

    let (_, count) = app.get("/api/promotion/quotation-count").await;
    assert_eq!(count["count"], 30);
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = test_app();
    let (status, body) = app.get("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorCode"], "NOT_FOUND");
}
