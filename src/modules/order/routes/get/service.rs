use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, order::service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, order_number: i64) -> response::Response {
    service::get_order_details(ctx, auth.user.id, order_number)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?
        .map(response::Success::Order)
        .ok_or(response::Error::OrderNotFound)
}
