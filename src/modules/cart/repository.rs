use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::utils::pricing::PricedLine;

/// Upper bound on a single cart line; repeated adds saturate here.
pub const MAX_ITEM_QUANTITY: i32 = 1000;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Cart {
    pub id: String,
    pub owner_id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct CartItem {
    pub cart_id: String,
    pub item_id: String,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A cart row joined with the menu item's current name and price.
#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct CartLine {
    pub item_id: String,
    pub quantity: i32,
    pub name: String,
    pub price: BigDecimal,
}

impl PricedLine for CartLine {
    fn unit_price(&self) -> &BigDecimal {
        &self.price
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }
}

pub struct CreateCartPayload {
    pub owner_id: String,
}

pub struct AddCartItemPayload {
    pub cart_id: String,
    pub item_id: String,
    pub quantity: i32,
}

pub struct UpdateCartItemPayload {
    pub cart_id: String,
    pub item_id: String,
    pub quantity: i32,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateCartPayload) -> Result<Cart, Error> {
    // a concurrent create for the same owner resolves to the existing row
    sqlx::query_as::<_, Cart>(
        "
        INSERT INTO carts (
            id,
            owner_id
        )
        VALUES ($1, $2)
        ON CONFLICT (owner_id) DO UPDATE SET owner_id = EXCLUDED.owner_id
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.owner_id.clone())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create a cart for owner {}: {}",
            payload.owner_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Option<Cart>, Error> {
    sqlx::query_as::<_, Cart>("SELECT * FROM carts WHERE owner_id = $1")
        .bind(owner_id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch cart by owner id {}: {}",
                owner_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn add_item<'e, E: PgExecutor<'e>>(
    e: E,
    payload: AddCartItemPayload,
) -> Result<CartItem, Error> {
    sqlx::query_as::<_, CartItem>(
        "
        INSERT INTO cart_items (
            cart_id,
            item_id,
            quantity
        )
        VALUES ($1, $2, $3)
        ON CONFLICT (cart_id, item_id) DO UPDATE SET
            quantity = LEAST(cart_items.quantity + EXCLUDED.quantity, $4),
            updated_at = NOW()
        RETURNING *
        ",
    )
    .bind(payload.cart_id.clone())
    .bind(payload.item_id.clone())
    .bind(payload.quantity)
    .bind(MAX_ITEM_QUANTITY)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to add item {} to cart {}: {}",
            payload.item_id,
            payload.cart_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_item_quantity<'e, E: PgExecutor<'e>>(
    e: E,
    payload: UpdateCartItemPayload,
) -> Result<Option<CartItem>, Error> {
    sqlx::query_as::<_, CartItem>(
        "
        UPDATE cart_items SET
            quantity = $1,
            updated_at = NOW()
        WHERE
            cart_id = $2
            AND item_id = $3
        RETURNING *
        ",
    )
    .bind(payload.quantity)
    .bind(payload.cart_id.clone())
    .bind(payload.item_id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update quantity of item {} in cart {}: {}",
            payload.item_id,
            payload.cart_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Returns the number of rows removed.
pub async fn delete_item<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: String,
    item_id: String,
) -> Result<u64, Error> {
    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1 AND item_id = $2")
        .bind(cart_id.clone())
        .bind(item_id.clone())
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to remove item {} from cart {}: {}",
                item_id,
                cart_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete_items<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: String,
    item_ids: Vec<String>,
) -> Result<u64, Error> {
    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1 AND item_id = ANY($2)")
        .bind(cart_id.clone())
        .bind(item_ids)
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to clear items from cart {}: {}",
                cart_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_lines_by_cart_id<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: String,
) -> Result<Vec<CartLine>, Error> {
    sqlx::query_as::<_, CartLine>(
        "
        SELECT
            cart_items.item_id,
            cart_items.quantity,
            menu_items.name,
            menu_items.price
        FROM
            cart_items
        INNER JOIN menu_items
        ON
            menu_items.id = cart_items.item_id
        WHERE
            cart_items.cart_id = $1
        ORDER BY
            cart_items.created_at
        ",
    )
    .bind(cart_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch items of cart {}: {}",
            cart_id,
            err
        );
        Error::UnexpectedError
    })
}
