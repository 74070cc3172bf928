use super::repository;
use crate::{modules::menu, types::Context};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

async fn get_categories(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    match repository::find_many(&ctx.db_conn.pool).await {
        Ok(categories) => (StatusCode::OK, Json(json!(categories))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch menu categories" })),
        ),
    }
}

async fn get_category_by_id(
    Path(id): Path<String>,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    let category = match repository::find_by_id(&ctx.db_conn.pool, id).await {
        Ok(Some(category)) => category,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Category not found" })),
            )
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch category details" })),
            )
        }
    };

    match menu::repository::find_many_available_by_category_id(
        &ctx.db_conn.pool,
        category.id.clone(),
    )
    .await
    {
        Ok(items) => (
            StatusCode::OK,
            Json(json!({ "category": category, "items": items })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch category items" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(get_categories))
        .route("/:id", get(get_category_by_id))
}
