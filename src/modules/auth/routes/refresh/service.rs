use super::types::{request, response};
use crate::{modules::auth::service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    service::auth::regenerate_tokens_for_session(ctx, payload.refresh_token)
        .await
        .map(response::Success::Refreshed)
        .map_err(|err| match err {
            service::auth::Error::InvalidSession => response::Error::InvalidSession,
            service::auth::Error::ExpiredToken => response::Error::ExpiredSession,
            service::auth::Error::UnexpectedError => response::Error::UnexpectedError,
        })
}
