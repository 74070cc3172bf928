use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{auth, cart, category, menu, order, search, user};
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to Burger Lab API" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/auth", auth::get_router())
        .nest("/users", user::get_router())
        .nest("/categories", category::get_router())
        .nest("/items", menu::get_router())
        .nest("/search", search::get_router())
        .nest("/carts", cart::get_router())
        .nest("/orders", order::get_router())
}
