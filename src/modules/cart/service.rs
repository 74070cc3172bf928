use sqlx::PgPool;

use super::repository::{self, Cart, CartLine};
use crate::utils::pricing::Summary;
use bigdecimal::BigDecimal;
use serde::Serialize;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(Serialize, Debug)]
pub struct CartView {
    pub cart_id: String,
    pub items: Vec<CartLine>,
    pub summary: Summary,
}

pub async fn get_or_create_cart(pool: &PgPool, owner_id: String) -> Result<Cart, Error> {
    match repository::find_by_owner_id(pool, owner_id.clone())
        .await
        .map_err(|_| Error::UnexpectedError)?
    {
        Some(cart) => Ok(cart),
        None => {
            tracing::debug!("Creating cart for user {}", owner_id);
            repository::create(pool, repository::CreateCartPayload { owner_id })
                .await
                .map_err(|_| Error::UnexpectedError)
        }
    }
}

pub async fn get_cart_view(
    pool: &PgPool,
    owner_id: String,
    delivery_fee: &BigDecimal,
) -> Result<CartView, Error> {
    let cart = get_or_create_cart(pool, owner_id).await?;
    let items = repository::find_lines_by_cart_id(pool, cart.id.clone())
        .await
        .map_err(|_| Error::UnexpectedError)?;
    let summary = Summary::from_lines(&items, delivery_fee);

    Ok(CartView {
        cart_id: cart.id,
        items,
        summary,
    })
}
