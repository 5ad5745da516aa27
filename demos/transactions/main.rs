//! Transaction API demonstrating hypermedia links in responses
//!
//! Run with:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example transactions
//! curl -s localhost:8080/v1/transactions?page=1&page_size=5
//! ```
//!
//! Set `HATEOAS_CONFIG` to a YAML file to load link policies from disk
//! instead of the built-in registration.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use hateoas::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Transaction {
    id: Uuid,
    category_id: Uuid,
    user_id: Uuid,
    amount: f64,
    datetime: DateTime<Utc>,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl_resource!(Transaction, id);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTransactionRequest {
    category_id: Uuid,
    amount: f64,
    datetime: DateTime<Utc>,
    #[serde(default)]
    description: String,
}

#[derive(Clone)]
struct AppState {
    links: LinkGenerator,
    transactions: Arc<RwLock<Vec<Transaction>>>,
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

async fn list_transactions(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let mut pagination = query.pagination();
    let transactions = state.transactions.read().await;
    pagination.set_total(transactions.len() as u64);

    let page: Vec<Transaction> = transactions
        .iter()
        .skip(pagination.offset())
        .take(pagination.limit())
        .cloned()
        .collect();

    ApiResponse::collection(
        &state.links,
        "transaction",
        page,
        &origin,
        &pagination,
        StatusCode::OK,
    )
}

async fn get_transaction(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Path(id): Path<Uuid>,
) -> Response {
    let transactions = state.transactions.read().await;
    match transactions.iter().find(|t| t.id == id) {
        Some(transaction) => ApiResponse::single(
            &state.links,
            "transaction",
            transaction.clone(),
            &origin,
            StatusCode::OK,
        )
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("transaction '{id}' not found") })),
        )
            .into_response(),
    }
}

async fn create_transaction(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Json(request): Json<CreateTransactionRequest>,
) -> Response {
    if request.category_id.is_nil() {
        return bad_request("category id is required");
    }
    if request.amount <= 0.0 {
        return bad_request("amount must be greater than 0");
    }

    let now = Utc::now();
    let transaction = Transaction {
        id: Uuid::new_v4(),
        category_id: request.category_id,
        // No authentication in the demo: every transaction gets a fresh owner
        user_id: Uuid::new_v4(),
        amount: request.amount,
        datetime: request.datetime,
        description: request.description,
        created_at: now,
        updated_at: now,
    };
    tracing::info!(transaction_id = %transaction.id, "Transaction created");

    state.transactions.write().await.push(transaction.clone());

    ApiResponse::single(
        &state.links,
        "transaction",
        transaction,
        &origin,
        StatusCode::CREATED,
    )
    .into_response()
}

fn link_generator() -> anyhow::Result<LinkGenerator> {
    if let Ok(path) = env::var("HATEOAS_CONFIG") {
        let config = HateoasConfig::from_yaml_file(&path)?;
        config.validate()?;
        tracing::info!(path = %path, "Loaded link configuration");
        return Ok(config.into_generator());
    }

    let mut registry = ResourceRegistry::new("/v1");
    registry.register(
        "transaction",
        ResourceConfig::new("transactions")
            .with_default_links(["self", "collection", "create", "show", "update", "delete"])
            .with_pagination_links(["self", "collection"]),
    );
    Ok(registry.seal())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let state = AppState {
        links: link_generator()?,
        transactions: Arc::new(RwLock::new(Vec::new())),
    };

    let app = Router::new()
        .route(
            "/v1/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/v1/transactions/{id}", get(get_transaction))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = format!("{host}:{port}");

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
