use super::{
    super::super::repository,
    types::{request, response},
};
use crate::types::Context;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .filters
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    let query = payload.filters.query.trim();

    let menu_items =
        repository::find_menu_items_matching(&ctx.db_conn.pool, query, repository::MENU_ITEM_LIMIT)
            .await
            .map_err(|_| response::Error::SearchFailed)?;

    let menu_categories = repository::find_menu_categories_matching(
        &ctx.db_conn.pool,
        query,
        repository::MENU_CATEGORY_LIMIT,
    )
    .await
    .map_err(|_| response::Error::SearchFailed)?;

    Ok(response::Success::Result(repository::SearchResults {
        menu_items,
        menu_categories,
    }))
}
