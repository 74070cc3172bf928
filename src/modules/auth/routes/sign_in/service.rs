use super::types::{request, response};
use crate::{
    modules::{auth::service, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let user = user::repository::find_by_email(&ctx.db_conn.pool, payload.email.trim().to_string())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !service::password::verify(&payload.password, &user.password_hash) {
        return Err(response::Error::InvalidCredentials);
    }

    let session = service::auth::create_session(ctx.clone(), user.id)
        .await
        .map_err(|_| response::Error::FailedToCreateSession)?;

    Ok(response::Success::SignedIn(session))
}
