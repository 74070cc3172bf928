use super::{service::service, types::request};
use crate::{types::Context, utils::validation::JsonBody};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    JsonBody(payload): JsonBody<request::Payload>,
) -> impl IntoResponse {
    service(ctx, payload).await
}
