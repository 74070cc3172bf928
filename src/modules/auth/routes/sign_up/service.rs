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

    if payload.password != payload.confirm_password {
        return Err(response::Error::PasswordsDoNotMatch);
    }

    let email = payload.email.trim().to_lowercase();

    if user::repository::find_by_email(&ctx.db_conn.pool, email.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash =
        service::password::hash(&payload.password).map_err(|_| response::Error::SignupFailed)?;

    let user = user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            email,
            password_hash,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        user::repository::Error::UnexpectedError => response::Error::SignupFailed,
    })?;

    tracing::info!("New user signed up: {}", user.id);

    Ok(response::Success::SignedUp)
}
