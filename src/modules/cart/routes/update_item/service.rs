use super::types::{request, response};
use crate::{
    modules::{auth::middleware::Auth, cart},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, auth: Auth, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let cart = cart::service::get_or_create_cart(&ctx.db_conn.pool, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;

    match payload.body.change() {
        request::QuantityChange::Remove => {
            let removed =
                cart::repository::delete_item(&ctx.db_conn.pool, cart.id, payload.item_id)
                    .await
                    .map_err(|_| response::Error::FailedToUpdateQuantity)?;

            match removed {
                0 => Err(response::Error::CartItemNotFound),
                _ => Ok(response::Success::ItemRemoved),
            }
        }
        request::QuantityChange::Set(quantity) => cart::repository::update_item_quantity(
            &ctx.db_conn.pool,
            cart::repository::UpdateCartItemPayload {
                cart_id: cart.id,
                item_id: payload.item_id,
                quantity,
            },
        )
        .await
        .map_err(|_| response::Error::FailedToUpdateQuantity)?
        .map(response::Success::QuantityUpdated)
        .ok_or(response::Error::CartItemNotFound),
    }
}
