use super::repository;
use crate::types::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

async fn get_hot_sales(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    match repository::find_best_selling(&ctx.db_conn.pool, repository::SHOWCASE_LIMIT).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch hot sales" })),
        ),
    }
}

async fn get_new_products(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    match repository::find_newest(&ctx.db_conn.pool, repository::SHOWCASE_LIMIT).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch new products" })),
        ),
    }
}

async fn get_item_details(
    Path(id): Path<String>,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    match repository::find_details_by_id(&ctx.db_conn.pool, id).await {
        Ok(Some(details)) => (StatusCode::OK, Json(json!(details))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Item not found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch item details" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/hot", get(get_hot_sales))
        .route("/new", get(get_new_products))
        .route("/:id", get(get_item_details))
}
