//! End-to-end tests of the response envelope behind an axum router

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use hateoas::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let mut registry = ResourceRegistry::new("/v1");
    registry.register(
        "transaction",
        ResourceConfig::new("transactions")
            .with_default_links(["self", "collection", "create", "show", "update", "delete"])
            .with_custom_link("receipt", "{baseURL}/{resourceName}/{id}/receipt"),
    );
    let generator = registry.seal();

    Router::new()
        .route("/v1/transactions", get(list_transactions))
        .route("/v1/transactions/{id}", get(get_transaction))
        .route("/v1/ghosts", get(list_ghosts))
        .with_state(generator)
}

async fn list_transactions(
    State(links): State<LinkGenerator>,
    origin: RequestOrigin,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let pagination = query.pagination().with_total(23);
    ApiResponse::collection(
        &links,
        "transaction",
        json!([{ "id": "t-1" }]),
        &origin,
        &pagination,
        StatusCode::OK,
    )
}

async fn get_transaction(
    State(links): State<LinkGenerator>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    ApiResponse::single(
        &links,
        "transaction",
        json!({ "id": id, "amount": 1500 }),
        &headers,
        StatusCode::OK,
    )
}

async fn list_ghosts(
    State(links): State<LinkGenerator>,
    origin: RequestOrigin,
) -> impl IntoResponse {
    ApiResponse::collection(
        &links,
        "ghost",
        json!([]),
        &origin,
        &Pagination::default(),
        StatusCode::OK,
    )
}

async fn get_json(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_collection_response_shape() {
    let request = Request::builder()
        .uri("/v1/transactions?page=2&page_size=10")
        .header("host", "api.test")
        .body(Body::empty())
        .unwrap();

    let (status, body) = get_json(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], "t-1");
    assert_eq!(
        body["_links"]["self"]["href"],
        "http://api.test/v1/transactions?page=2&page_size=10"
    );
    assert_eq!(
        body["_links"]["collection"]["href"],
        "http://api.test/v1/transactions?page=2&page_size=10"
    );
    assert_eq!(body["_links"]["create"]["href"], "http://api.test/v1/transactions");
    assert!(body["_links"].get("show").is_none());
    assert_eq!(body["meta"]["statusCode"], 200);
    assert_eq!(
        body["pageInfo"],
        json!({ "pageSize": 10, "pageNumber": 2, "totalItems": 23, "totalPages": 3 })
    );
}

#[tokio::test]
async fn test_invalid_page_query_falls_back_to_defaults() {
    let request = Request::builder()
        .uri("/v1/transactions?page=abc&page_size=-3")
        .header("host", "api.test")
        .body(Body::empty())
        .unwrap();

    let (_, body) = get_json(request).await;

    assert_eq!(body["pageInfo"]["pageNumber"], 1);
    assert_eq!(body["pageInfo"]["pageSize"], 10);
    assert_eq!(
        body["_links"]["collection"]["href"],
        "http://api.test/v1/transactions?page=1&page_size=10"
    );
}

#[tokio::test]
async fn test_single_response_behind_proxy() {
    let request = Request::builder()
        .uri("/v1/transactions/t-9")
        .header("host", "10.0.0.5:8080")
        .header("x-forwarded-host", "api.example.com")
        .header("x-forwarded-proto", "https")
        .body(Body::empty())
        .unwrap();

    let (status, body) = get_json(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "t-9");
    assert_eq!(
        body["_links"]["self"]["href"],
        "https://api.example.com/v1/transactions/t-9"
    );
    assert_eq!(
        body["_links"]["update"]["href"],
        "https://api.example.com/v1/transactions/t-9"
    );
    assert_eq!(
        body["_links"]["receipt"]["href"],
        "https://api.example.com/v1/transactions/t-9/receipt"
    );
    assert!(body.get("pageInfo").is_none());
}

#[tokio::test]
async fn test_missing_host_still_responds_without_links() {
    let request = Request::builder()
        .uri("/v1/transactions/t-1")
        .body(Body::empty())
        .unwrap();

    let (status, body) = get_json(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "t-1");
    assert!(body.get("_links").is_none());
}

#[tokio::test]
async fn test_unregistered_type_still_responds() {
    let request = Request::builder()
        .uri("/v1/ghosts")
        .header("host", "api.test")
        .body(Body::empty())
        .unwrap();

    let (status, body) = get_json(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("_links").is_none());
    assert_eq!(body["pageInfo"]["totalPages"], 0);
}
