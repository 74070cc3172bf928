use crate::modules::{category::repository::MenuCategory, menu::repository::MenuItem};
use serde::Serialize;
use sqlx::PgExecutor;

pub const MENU_ITEM_LIMIT: i64 = 20;
pub const MENU_CATEGORY_LIMIT: i64 = 10;

#[derive(Serialize, Debug)]
pub struct SearchResults {
    pub menu_items: Vec<MenuItem>,
    pub menu_categories: Vec<MenuCategory>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// Builds an `ILIKE` pattern matching `query` anywhere, with wildcards in the query escaped.
pub fn to_contains_pattern(query: &str) -> String {
    let escaped = query
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    format!("%{}%", escaped)
}

pub async fn find_menu_items_matching<'e, E: PgExecutor<'e>>(
    e: E,
    query: &str,
    limit: i64,
) -> Result<Vec<MenuItem>, Error> {
    sqlx::query_as::<_, MenuItem>(
        r"
        SELECT * FROM menu_items
        WHERE
            name ILIKE $1 ESCAPE '\'
            OR description ILIKE $1 ESCAPE '\'
        ORDER BY name
        LIMIT $2
        ",
    )
    .bind(to_contains_pattern(query))
    .bind(limit)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to search menu items for {:?}: {}",
            query,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_menu_categories_matching<'e, E: PgExecutor<'e>>(
    e: E,
    query: &str,
    limit: i64,
) -> Result<Vec<MenuCategory>, Error> {
    sqlx::query_as::<_, MenuCategory>(
        r"
        SELECT * FROM menu_categories
        WHERE
            name ILIKE $1 ESCAPE '\'
            OR description ILIKE $1 ESCAPE '\'
        ORDER BY name
        LIMIT $2
        ",
    )
    .bind(to_contains_pattern(query))
    .bind(limit)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to search menu categories for {:?}: {}",
            query,
            err
        );
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::to_contains_pattern;

    #[test]
    fn wraps_query_in_wildcards() {
        assert_eq!(to_contains_pattern("burger"), "%burger%");
        assert_eq!(to_contains_pattern("  fries "), "%fries%");
    }

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(to_contains_pattern("100%"), "%100\\%%");
        assert_eq!(to_contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(to_contains_pattern("c\\d"), "%c\\\\d%");
    }
}
