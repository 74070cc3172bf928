mod add_item;
mod get;
mod remove_item;
mod update_item;

use crate::types::Context;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(get::handler::handler))
        .route("/items", post(add_item::handler::handler))
        .route(
            "/items/:item_id",
            put(update_item::handler::handler).delete(remove_item::handler::handler),
        )
}
