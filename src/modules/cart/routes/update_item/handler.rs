use super::{service::service, types::request};
use crate::{modules::auth::middleware::Auth, types::Context, utils::validation::JsonBody};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    Path(item_id): Path<String>,
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    JsonBody(body): JsonBody<request::Body>,
) -> impl IntoResponse {
    service(ctx, auth, request::Payload { item_id, body }).await
}
