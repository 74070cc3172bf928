mod get;
mod list;
mod place;

use crate::types::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", post(place::handler::handler).get(list::handler::handler))
        .route("/:order_number", get(get::handler::handler))
}
