use super::types::{request, response};
use crate::{
    modules::{auth::middleware::Auth, cart, menu},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, auth: Auth, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let item = menu::repository::find_by_id(&ctx.db_conn.pool, payload.item_id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchItem)?
        .ok_or(response::Error::ItemNotFound)?;

    if !item.is_available {
        return Err(response::Error::ItemNotAvailable);
    }

    let cart = cart::service::get_or_create_cart(&ctx.db_conn.pool, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;

    cart::repository::add_item(
        &ctx.db_conn.pool,
        cart::repository::AddCartItemPayload {
            cart_id: cart.id,
            item_id: item.id,
            quantity: payload.quantity,
        },
    )
    .await
    .map(response::Success::ItemAdded)
    .map_err(|_| response::Error::FailedToAddItem)
}
