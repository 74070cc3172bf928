use super::types::{request, response};
use crate::{
    modules::{auth::middleware::Auth, order::service},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, auth: Auth, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if !payload.has_required_card_details() {
        return Err(response::Error::CardDetailsRequired);
    }

    service::place_order(
        ctx,
        service::PlaceOrderPayload {
            owner_id: auth.user.id,
            address: payload.address,
            phone_number: payload.phone_number,
            payment_method: payload.payment_method,
        },
    )
    .await
    .map(response::Success::OrderPlaced)
    .map_err(|err| match err {
        service::Error::CartEmpty => response::Error::CartEmpty,
        service::Error::FailedToFetchCart => response::Error::FailedToFetchCart,
        service::Error::FailedToCreateOrder => response::Error::FailedToCreateOrder,
        service::Error::FailedToAddOrderItems => response::Error::FailedToAddOrderItems,
        service::Error::FailedToCreatePaymentRecord => {
            response::Error::FailedToCreatePaymentRecord
        }
        service::Error::UnexpectedError => response::Error::UnexpectedError,
    })
}
