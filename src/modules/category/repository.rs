use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<MenuCategory>, Error> {
    sqlx::query_as::<_, MenuCategory>("SELECT * FROM menu_categories ORDER BY name")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch menu categories: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<MenuCategory>, Error> {
    sqlx::query_as::<_, MenuCategory>("SELECT * FROM menu_categories WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch menu category by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
