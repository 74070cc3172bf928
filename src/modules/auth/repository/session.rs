use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_at: NaiveDateTime,
    pub refresh_token_expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Session {
    pub fn access_token_expired(&self, now: NaiveDateTime) -> bool {
        self.access_token_expires_at < now
    }

    /// Sessions past this point can no longer be refreshed and are pruned.
    pub fn refresh_token_expired(&self, now: NaiveDateTime) -> bool {
        self.refresh_token_expires_at < now
    }
}

pub struct SessionCreationPayload {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_at: NaiveDateTime,
    pub refresh_token_expires_at: NaiveDateTime,
}

pub struct UpdateSessionPayload {
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_at: NaiveDateTime,
    pub refresh_token_expires_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: SessionCreationPayload,
) -> Result<Session, Error> {
    sqlx::query_as::<_, Session>(
        "
        INSERT INTO sessions (
            id,
            user_id,
            access_token,
            refresh_token,
            access_token_expires_at,
            refresh_token_expires_at
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id.clone())
    .bind(payload.access_token)
    .bind(payload.refresh_token)
    .bind(payload.access_token_expires_at)
    .bind(payload.refresh_token_expires_at)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating a new session for user with id {}: {}",
            payload.user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_access_token<'e, E: PgExecutor<'e>>(
    e: E,
    access_token: String,
) -> Result<Option<Session>, Error> {
    sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE access_token = $1")
        .bind(access_token)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching session by access token: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_refresh_token<'e, E: PgExecutor<'e>>(
    e: E,
    refresh_token: String,
) -> Result<Option<Session>, Error> {
    sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE refresh_token = $1")
        .bind(refresh_token)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching session by refresh token: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateSessionPayload,
) -> Result<Session, Error> {
    sqlx::query_as::<_, Session>(
        "
        UPDATE sessions SET
            access_token = $1,
            refresh_token = $2,
            access_token_expires_at = $3,
            refresh_token_expires_at = $4,
            updated_at = NOW()
        WHERE
            id = $5
        RETURNING *
        ",
    )
    .bind(payload.access_token)
    .bind(payload.refresh_token)
    .bind(payload.access_token_expires_at)
    .bind(payload.refresh_token_expires_at)
    .bind(id.clone())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while updating session with id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while deleting session with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete_expired_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
    now: NaiveDateTime,
) -> Result<u64, Error> {
    sqlx::query("DELETE FROM sessions WHERE user_id = $1 AND refresh_token_expires_at < $2")
        .bind(user_id.clone())
        .bind(now)
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while pruning expired sessions for user with id {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn session(access_ttl: Duration, refresh_ttl: Duration) -> Session {
        let now = Utc::now().naive_utc();

        Session {
            id: Ulid::new().to_string(),
            user_id: Ulid::new().to_string(),
            access_token: Ulid::new().to_string(),
            refresh_token: Ulid::new().to_string(),
            access_token_expires_at: now + access_ttl,
            refresh_token_expires_at: now + refresh_ttl,
            created_at: now,
            updated_at: None,
        }
    }

    #[test]
    fn fresh_session_is_not_expired() {
        let session = session(Duration::minutes(60), Duration::days(30));
        let now = Utc::now().naive_utc();

        assert!(!session.access_token_expired(now));
        assert!(!session.refresh_token_expired(now));
    }

    #[test]
    fn access_token_expires_before_refresh_token() {
        let session = session(Duration::minutes(-1), Duration::days(30));
        let now = Utc::now().naive_utc();

        assert!(session.access_token_expired(now));
        assert!(!session.refresh_token_expired(now));
    }

    #[test]
    fn session_past_refresh_expiry_is_prunable() {
        let session = session(Duration::days(-2), Duration::days(-1));
        assert!(session.refresh_token_expired(Utc::now().naive_utc()));
    }
}
