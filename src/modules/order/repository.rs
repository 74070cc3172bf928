use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, Postgres, QueryBuilder};
use std::fmt;
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
        }
    }
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Order {
    pub id: String,
    pub order_number: i64,
    pub owner_id: String,
    pub total_price: BigDecimal,
    pub address: String,
    pub phone_number: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// An order row joined with the menu item's name.
#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct OrderLine {
    pub item_id: String,
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
}

pub struct CreateOrderPayload {
    pub order_number: i64,
    pub owner_id: String,
    pub total_price: BigDecimal,
    pub address: String,
    pub phone_number: String,
}

pub struct CreateOrderItemPayload {
    pub item_id: String,
    pub quantity: i32,
    pub price: BigDecimal,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateOrderPayload,
) -> Result<Order, Error> {
    sqlx::query_as::<_, Order>(
        "
        INSERT INTO orders (
            id,
            order_number,
            owner_id,
            total_price,
            address,
            phone_number,
            status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.order_number)
    .bind(payload.owner_id)
    .bind(payload.total_price)
    .bind(payload.address)
    .bind(payload.phone_number)
    .bind(OrderStatus::Pending.to_string())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an order: {}", err);
        Error::UnexpectedError
    })
}

pub async fn create_items<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
    items: Vec<CreateOrderItemPayload>,
) -> Result<(), Error> {
    if items.is_empty() {
        return Ok(());
    }

    let mut query_builder: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO order_items (id, order_id, item_id, quantity, price) ");

    query_builder.push_values(items, |mut row, item| {
        row.push_bind(Ulid::new().to_string())
            .push_bind(order_id.clone())
            .push_bind(item.item_id)
            .push_bind(item.quantity)
            .push_bind(item.price);
    });

    query_builder
        .build()
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to add items to order {}: {}",
                order_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_order_number_and_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    order_number: i64,
    owner_id: String,
) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE order_number = $1 AND owner_id = $2")
        .bind(order_number)
        .bind(owner_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch order {}: {}",
                order_number,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_lines_by_order_id<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
) -> Result<Vec<OrderLine>, Error> {
    sqlx::query_as::<_, OrderLine>(
        "
        SELECT
            order_items.item_id,
            menu_items.name,
            order_items.quantity,
            order_items.price
        FROM
            order_items
        INNER JOIN menu_items
        ON
            menu_items.id = order_items.item_id
        WHERE
            order_items.order_id = $1
        ORDER BY
            menu_items.name
        ",
    )
    .bind(order_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch items of order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn count_by_owner_id<'e, E: PgExecutor<'e>>(e: E, owner_id: String) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE owner_id = $1")
        .bind(owner_id.clone())
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to count orders of user {}: {}",
                owner_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
    pagination: &Pagination,
) -> Result<Vec<Order>, Error> {
    sqlx::query_as::<_, Order>(
        "
        SELECT * FROM orders
        WHERE
            owner_id = $1
        ORDER BY
            created_at DESC
        LIMIT $2
        OFFSET $3
        ",
    )
    .bind(owner_id.clone())
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch orders of user {}: {}",
            owner_id,
            err
        );
        Error::UnexpectedError
    })
}

pub fn paginate(orders: Vec<Order>, total: i64, pagination: &Pagination) -> Paginated<Order> {
    Paginated::new(
        orders,
        total.max(0) as u32,
        pagination.page.max(1),
        pagination.limit() as u32,
    )
}
