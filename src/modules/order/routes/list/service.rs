use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, order::repository},
    types::Context,
    utils::pagination::Pagination,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, pagination: Pagination) -> response::Response {
    let total = repository::count_by_owner_id(&ctx.db_conn.pool, auth.user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)?;

    let orders = repository::find_many_by_owner_id(&ctx.db_conn.pool, auth.user.id, &pagination)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)?;

    Ok(response::Success::Orders(repository::paginate(
        orders,
        total,
        &pagination,
    )))
}
