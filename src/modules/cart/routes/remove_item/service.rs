use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, cart},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, item_id: String) -> response::Response {
    let cart = cart::service::get_or_create_cart(&ctx.db_conn.pool, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;

    cart::repository::delete_item(&ctx.db_conn.pool, cart.id, item_id)
        .await
        .map_err(|_| response::Error::FailedToRemoveItem)?;

    Ok(response::Success::ItemRemoved)
}
