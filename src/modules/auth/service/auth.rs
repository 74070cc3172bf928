use chrono::Utc;
use ulid::Ulid;

use super::super::repository;
use crate::{modules::auth::repository::session::Session, types::Context};
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create_session(ctx: Arc<Context>, user_id: String) -> Result<Session> {
    let now = Utc::now().naive_utc();

    // a failed prune must not block sign in
    if let Ok(pruned) =
        repository::session::delete_expired_by_user_id(&ctx.db_conn.pool, user_id.clone(), now)
            .await
    {
        if pruned > 0 {
            tracing::info!("Pruned {} expired session(s) for user {}", pruned, user_id);
        }
    }

    repository::session::create(
        &ctx.db_conn.pool,
        repository::session::SessionCreationPayload {
            user_id,
            access_token: Ulid::new().to_string(),
            refresh_token: Ulid::new().to_string(),
            access_token_expires_at: now + ctx.auth.access_token_ttl,
            refresh_token_expires_at: now + ctx.auth.refresh_token_ttl,
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)
}

pub async fn regenerate_tokens_for_session(
    ctx: Arc<Context>,
    refresh_token: String,
) -> Result<Session> {
    let session = verify_refresh_token(ctx.clone(), refresh_token).await?;
    let now = Utc::now().naive_utc();

    repository::session::update_by_id(
        &ctx.db_conn.pool,
        session.id,
        repository::session::UpdateSessionPayload {
            access_token: Ulid::new().to_string(),
            refresh_token: Ulid::new().to_string(),
            access_token_expires_at: now + ctx.auth.access_token_ttl,
            refresh_token_expires_at: now + ctx.auth.refresh_token_ttl,
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)
}

pub async fn verify_access_token(ctx: Arc<Context>, access_token: String) -> Result<Session> {
    let session = repository::session::find_by_access_token(&ctx.db_conn.pool, access_token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.access_token_expired(Utc::now().naive_utc()) {
        return Err(Error::ExpiredToken);
    };

    Ok(session)
}

pub async fn verify_refresh_token(ctx: Arc<Context>, refresh_token: String) -> Result<Session> {
    let session = repository::session::find_by_refresh_token(&ctx.db_conn.pool, refresh_token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.refresh_token_expired(Utc::now().naive_utc()) {
        return Err(Error::ExpiredToken);
    };

    Ok(session)
}

pub async fn end_session(ctx: Arc<Context>, session: Session) -> Result<()> {
    repository::session::delete_by_id(&ctx.db_conn.pool, session.id)
        .await
        .map_err(|_| Error::UnexpectedError)
}
