use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, cart},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    cart::service::get_cart_view(&ctx.db_conn.pool, auth.user.id, &ctx.store.delivery_fee)
        .await
        .map(response::Success::Cart)
        .map_err(|_| response::Error::FailedToFetchCart)
}
