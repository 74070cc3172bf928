use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image: Option<String>,
    pub category_id: String,
    pub quantity: i32,
    pub sold: i32,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct MenuItemDetails {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub item: MenuItem,
    pub category_name: String,
}

pub const SHOWCASE_LIMIT: i64 = 6;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<MenuItem>, Error> {
    sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch menu item by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_details_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<MenuItemDetails>, Error> {
    sqlx::query_as::<_, MenuItemDetails>(
        "
        SELECT
            menu_items.*,
            menu_categories.name AS category_name
        FROM
            menu_items
        INNER JOIN menu_categories
        ON
            menu_categories.id = menu_items.category_id
        WHERE
            menu_items.id = $1
        ",
    )
    .bind(id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch menu item details by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_available_by_category_id<'e, E: PgExecutor<'e>>(
    e: E,
    category_id: String,
) -> Result<Vec<MenuItem>, Error> {
    sqlx::query_as::<_, MenuItem>(
        "
        SELECT * FROM menu_items
        WHERE
            category_id = $1
            AND is_available = TRUE
        ORDER BY name
        ",
    )
    .bind(category_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch menu items for category {}: {}",
            category_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_best_selling<'e, E: PgExecutor<'e>>(
    e: E,
    limit: i64,
) -> Result<Vec<MenuItem>, Error> {
    sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items ORDER BY sold DESC LIMIT $1")
        .bind(limit)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch hot sales: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_newest<'e, E: PgExecutor<'e>>(e: E, limit: i64) -> Result<Vec<MenuItem>, Error> {
    sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items ORDER BY created_at DESC LIMIT $1")
        .bind(limit)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch new products: {}", err);
            Error::UnexpectedError
        })
}
