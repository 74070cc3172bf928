use bigdecimal::BigDecimal;
use rand::Rng;
use std::sync::Arc;

use super::repository::{self, Order, OrderLine};
use crate::{
    modules::{
        cart::{self, repository::CartLine},
        payment::{self, repository::PaymentMethod},
    },
    types::Context,
    utils::pricing::Summary,
};

pub const ORDER_NUMBER_MIN: i64 = 1_000_000_000;
pub const ORDER_NUMBER_MAX: i64 = 9_999_999_999;

/// A random 10-digit order number. Collisions are left to the unique index.
pub fn generate_order_number() -> i64 {
    rand::thread_rng().gen_range(ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX)
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    CartEmpty,
    FailedToFetchCart,
    FailedToCreateOrder,
    FailedToAddOrderItems,
    FailedToCreatePaymentRecord,
    UnexpectedError,
}

pub fn ensure_not_empty(lines: &[CartLine]) -> Result<(), Error> {
    match lines.is_empty() {
        true => Err(Error::CartEmpty),
        false => Ok(()),
    }
}

/// Only these rows are cleared once the order commits; later additions stay in the cart.
pub fn ordered_item_ids(lines: &[CartLine]) -> Vec<String> {
    lines.iter().map(|line| line.item_id.clone()).collect()
}

pub struct PlaceOrderPayload {
    pub owner_id: String,
    pub address: String,
    pub phone_number: String,
    pub payment_method: PaymentMethod,
}

#[derive(Debug)]
pub struct PlacedOrder {
    pub order: Order,
    pub summary: Summary,
}

pub async fn place_order(ctx: Arc<Context>, payload: PlaceOrderPayload) -> Result<PlacedOrder, Error> {
    let pool = &ctx.db_conn.pool;

    let cart = cart::service::get_or_create_cart(pool, payload.owner_id.clone())
        .await
        .map_err(|_| Error::FailedToFetchCart)?;

    let lines = cart::repository::find_lines_by_cart_id(pool, cart.id.clone())
        .await
        .map_err(|_| Error::FailedToFetchCart)?;

    ensure_not_empty(&lines)?;

    let ordered_item_ids = ordered_item_ids(&lines);
    let summary = Summary::from_lines(&lines, &ctx.store.delivery_fee);

    let mut tx = pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        Error::UnexpectedError
    })?;

    let order = repository::create(
        &mut *tx,
        repository::CreateOrderPayload {
            order_number: generate_order_number(),
            owner_id: payload.owner_id.clone(),
            total_price: summary.total.clone(),
            address: payload.address.trim().to_string(),
            phone_number: payload.phone_number.trim().to_string(),
        },
    )
    .await
    .map_err(|_| Error::FailedToCreateOrder)?;

    repository::create_items(
        &mut *tx,
        order.id.clone(),
        lines
            .into_iter()
            .map(|line| repository::CreateOrderItemPayload {
                item_id: line.item_id,
                quantity: line.quantity,
                price: line.price,
            })
            .collect(),
    )
    .await
    .map_err(|_| Error::FailedToAddOrderItems)?;

    payment::repository::create(
        &mut *tx,
        payment::repository::CreatePaymentPayload {
            order_id: order.id.clone(),
            amount: summary.total.clone(),
            method: payload.payment_method,
        },
    )
    .await
    .map_err(|_| Error::FailedToCreatePaymentRecord)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        Error::UnexpectedError
    })?;

    // the order stands even if the cart could not be emptied
    if cart::repository::delete_items(pool, cart.id.clone(), ordered_item_ids)
        .await
        .is_err()
    {
        tracing::warn!(
            "Failed to clear cart {} after placing order {}",
            cart.id,
            order.order_number
        );
    }

    tracing::info!(
        "Order {} placed by user {} for {}",
        order.order_number,
        payload.owner_id,
        order.total_price
    );

    Ok(PlacedOrder { order, summary })
}

#[derive(serde::Serialize, Debug)]
pub struct OrderDetails {
    pub order_number: i64,
    pub total_price: BigDecimal,
    pub address: String,
    pub phone_number: String,
    pub status: String,
    pub items: Vec<OrderLine>,
}

pub async fn get_order_details(
    ctx: Arc<Context>,
    owner_id: String,
    order_number: i64,
) -> Result<Option<OrderDetails>, Error> {
    let pool = &ctx.db_conn.pool;

    let order = match repository::find_by_order_number_and_owner_id(pool, order_number, owner_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
    {
        Some(order) => order,
        None => return Ok(None),
    };

    let items = repository::find_lines_by_order_id(pool, order.id.clone())
        .await
        .map_err(|_| Error::UnexpectedError)?;

    Ok(Some(OrderDetails {
        order_number: order.order_number,
        total_price: order.total_price,
        address: order.address,
        phone_number: order.phone_number,
        status: order.status,
        items,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_numbers_have_ten_digits() {
        for _ in 0..1000 {
            let order_number = generate_order_number();
            assert_eq!(order_number.to_string().len(), 10);
            assert!((ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX).contains(&order_number));
        }
    }

    fn line(item_id: &str, quantity: i32) -> CartLine {
        CartLine {
            item_id: item_id.to_string(),
            quantity,
            name: "Classic Burger".to_string(),
            price: BigDecimal::from(5),
        }
    }

    #[test]
    fn empty_cart_cannot_be_ordered() {
        assert_eq!(ensure_not_empty(&[]), Err(Error::CartEmpty));
        assert_eq!(ensure_not_empty(&[line("01JBURGER", 1)]), Ok(()));
    }

    #[test]
    fn only_ordered_items_are_cleared() {
        let lines = vec![line("01JBURGER", 2), line("01JFRIES", 1)];
        assert_eq!(ordered_item_ids(&lines), vec!["01JBURGER", "01JFRIES"]);
    }
}
