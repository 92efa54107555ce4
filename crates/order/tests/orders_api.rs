mod common;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use common::{app, app_with, create, send, send_raw};
use order::{
    abstract_trait::order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    chaos::{ChaosConfig, ThreadRandom},
    di::DependenciesInjectDeps,
    domain::{
        filter::OrderFilter,
        requests::order::{CreateOrderRecordRequest, UpdateOrderRecordRequest},
    },
    model::Order as OrderModel,
};
use serde_json::{Value, json};
use shared::errors::RepositoryError;
use std::sync::Arc;

#[tokio::test]
async fn janet_order_lifecycle() {
    let app = app();

    let created = create(
        &app,
        json!({
            "customerName": "Janet",
            "totalAmount": 50,
            "items": [{ "name": "Hammer", "price": 50 }]
        }),
    )
    .await;

    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["customerName"], "Janet");
    assert_eq!(created["status"], "pending");
    assert_eq!(created["items"], json!([{ "name": "Hammer", "price": 50 }]));
    assert!(created["createdAt"].is_string());

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/orders/{id}"),
        Some(json!({ "status": "shipped" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "shipped");
    assert_eq!(updated["customerName"], created["customerName"]);
    assert_eq!(updated["totalAmount"], created["totalAmount"]);
    assert_eq!(updated["items"], created["items"]);

    let (status, body) = send(&app, Method::DELETE, &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Order not found" }));
}

#[tokio::test]
async fn created_orders_get_unique_ids_and_pending_status() {
    let app = app();

    let first = create(&app, json!({ "customerName": "Alice", "totalAmount": 10 })).await;
    let second = create(&app, json!({ "customerName": "Alice", "totalAmount": 10 })).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["status"], "pending");
    assert_eq!(second["status"], "pending");
    assert_eq!(first["items"], json!([]));

    let (status, fetched) = send(
        &app,
        Method::GET,
        &format!("/orders/{}", first["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, first);
}

#[tokio::test]
async fn deleted_ids_are_never_reused() {
    let app = app();

    let first = create(&app, json!({ "customerName": "Alice", "totalAmount": 10 })).await;
    let (status, _) = send(&app, Method::DELETE, &format!("/orders/{}", first["id"]), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let second = create(&app, json!({ "customerName": "Alice", "totalAmount": 10 })).await;
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let app = app();

    let cases = [
        (json!({ "totalAmount": 5 }), "\"customerName\" is required"),
        (
            json!({ "customerName": "Al", "totalAmount": 5 }),
            "\"customerName\" length must be at least 3 characters long",
        ),
        (
            json!({ "customerName": "Alice", "totalAmount": -1 }),
            "\"totalAmount\" must be a positive number",
        ),
        (
            json!({ "customerName": "Alice", "totalAmount": 5, "status": "lost" }),
            "\"status\" must be one of [pending, shipped, delivered, cancelled]",
        ),
        (
            json!({ "customerName": "Alice", "totalAmount": 5, "items": [1] }),
            "\"items[0]\" must be of type object",
        ),
        (
            json!({ "customerName": "Alice", "totalAmount": 5, "id": 7 }),
            "\"id\" is not allowed",
        ),
    ];

    for (payload, message) in cases {
        let (status, body) = send(&app, Method::POST, "/orders", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body, json!({ "error": message }), "payload: {payload}");
    }

    let (_, orders) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn empty_update_is_rejected_even_for_missing_ids() {
    let app = app();
    let created = create(&app, json!({ "customerName": "Alice", "totalAmount": 10 })).await;

    for uri in [format!("/orders/{}", created["id"]), "/orders/999999".to_string()] {
        let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body, json!({ "error": "\"value\" must have at least 1 key" }));
    }
}

#[tokio::test]
async fn unknown_ids_answer_not_found() {
    let app = app();

    let (status, _) = send(&app, Method::GET, "/orders/424242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/orders/424242",
        Some(json!({ "status": "delivered" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");

    let (status, _) = send(&app, Method::DELETE, "/orders/424242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_delete_answers_not_found() {
    let app = app();
    let created = create(&app, json!({ "customerName": "Alice", "totalAmount": 10 })).await;
    let uri = format!("/orders/{}", created["id"]);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "totalAmount": 3 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn partial_update_keeps_untouched_fields() {
    let app = app();
    let created = create(
        &app,
        json!({
            "customerName": "Alice",
            "totalAmount": 10,
            "status": "shipped",
            "items": [{ "sku": "A" }]
        }),
    )
    .await;

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/orders/{}", created["id"]),
        Some(json!({ "totalAmount": 12.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["totalAmount"], 12.5);
    assert_eq!(updated["customerName"], created["customerName"]);
    assert_eq!(updated["status"], created["status"]);
    assert_eq!(updated["items"], created["items"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn update_validates_supplied_fields() {
    let app = app();
    let created = create(&app, json!({ "customerName": "Alice", "totalAmount": 10 })).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/orders/{}", created["id"]),
        Some(json!({ "totalAmount": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "\"totalAmount\" must be a positive number");
}

#[tokio::test]
async fn list_filters_by_status_and_name() {
    let app = app();

    create(&app, json!({ "customerName": "Janet", "totalAmount": 20, "status": "shipped" })).await;
    create(&app, json!({ "customerName": "Bob", "totalAmount": 15, "status": "shipped" })).await;
    create(&app, json!({ "customerName": "Hannah", "totalAmount": 5 })).await;

    let names = |orders: &Value| -> Vec<String> {
        orders
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["customerName"].as_str().unwrap().to_string())
            .collect()
    };

    let (status, all) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&all), ["Janet", "Bob", "Hannah"]);

    let (_, shipped) = send(&app, Method::GET, "/orders?status=shipped", None).await;
    assert_eq!(names(&shipped), ["Janet", "Bob"]);

    let (_, by_name) = send(&app, Method::GET, "/orders?customerName=an", None).await;
    assert_eq!(names(&by_name), ["Janet", "Hannah"]);

    let (_, both) = send(&app, Method::GET, "/orders?status=shipped&customerName=an", None).await;
    assert_eq!(names(&both), ["Janet"]);

    let (_, empty_name) = send(&app, Method::GET, "/orders?customerName=", None).await;
    assert_eq!(names(&empty_name), ["Janet", "Bob", "Hannah"]);

    let (status, unknown) = send(&app, Method::GET, "/orders?status=lost", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unknown, json!([]));
}

#[tokio::test]
async fn name_filter_treats_wildcards_literally() {
    let app = app();

    create(&app, json!({ "customerName": "100% Cotton", "totalAmount": 20 })).await;
    create(&app, json!({ "customerName": "Bob", "totalAmount": 15 })).await;

    let (_, orders) = send(&app, Method::GET, "/orders?customerName=%25", None).await;
    let orders = orders.as_array().unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["customerName"], "100% Cotton");
}

#[tokio::test]
async fn malformed_requests_answer_bad_request() {
    let app = app();

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/orders",
        Some("application/json"),
        "{\"customerName\": ",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));

    let (status, body) = send(&app, Method::POST, "/orders", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "\"value\" must be of type object");

    let (status, body) = send(&app, Method::GET, "/orders/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "\"id\" must be a number");
}

#[tokio::test]
async fn rejected_query_and_path_use_error_body() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/orders?status=shipped&status=pending",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("status"));

    let (status, body) = send(&app, Method::GET, "/orders/%FF", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/orders/%FF",
        Some(json!({ "status": "shipped" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unsupported_methods_answer_json_405() {
    let app = app();

    for (method, uri) in [(Method::PUT, "/orders"), (Method::POST, "/orders/1")] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "uri: {uri}");
        assert_eq!(body, json!({ "error": "Method Not Allowed" }));
    }
}

#[tokio::test]
async fn unknown_routes_answer_json_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/customers", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_and_metrics_are_exposed() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    create(&app, json!({ "customerName": "Alice", "totalAmount": 10 })).await;

    let (status, text) = send_raw(&app, Method::GET, "/metrics", None, "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("order_command_service_requests_total"));
    assert!(text.contains("order_query_service_request_duration_seconds"));
    assert!(text.contains("chaos_simulated_faults"));
}

struct BrokenStore;

#[async_trait]
impl OrderQueryRepositoryTrait for BrokenStore {
    async fn find_all(&self, _filter: &OrderFilter) -> Result<Vec<OrderModel>, RepositoryError> {
        Err(RepositoryError::Custom("connection refused".into()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<OrderModel>, RepositoryError> {
        Err(RepositoryError::Custom("connection refused".into()))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for BrokenStore {
    async fn create_order(
        &self,
        _req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        Err(RepositoryError::Custom("connection refused".into()))
    }

    async fn update_order(
        &self,
        _req: &UpdateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        Err(RepositoryError::Custom("connection refused".into()))
    }

    async fn delete_order(&self, _id: i64) -> Result<(), RepositoryError> {
        Err(RepositoryError::Custom("connection refused".into()))
    }
}

#[tokio::test]
async fn store_failures_hide_details_behind_generic_message() {
    let store = Arc::new(BrokenStore);
    let app = app_with(
        DependenciesInjectDeps {
            query: store.clone(),
            command: store,
        },
        ChaosConfig::disabled(),
        Arc::new(ThreadRandom),
    );

    let expected = json!({ "error": "Internal Server Error" });

    let (status, body) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "customerName": "Alice", "totalAmount": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, expected);

    for (method, uri) in [
        (Method::GET, "/orders"),
        (Method::GET, "/orders/1"),
        (Method::DELETE, "/orders/1"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "uri: {uri}");
        assert_eq!(body, expected);
    }
}
