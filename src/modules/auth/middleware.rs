use super::{repository::session::Session, service};
use crate::modules::user::{self, repository::User};
use crate::types::Context;
use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

enum Error {
    InvalidSession,
    ExpiredSession,
    UnexpectedError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidSession => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid session token" })),
            )
                .into_response(),
            Error::ExpiredSession => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Session expired" })),
            )
                .into_response(),
            Error::UnexpectedError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Sorry, an error occurred" })),
            )
                .into_response(),
        }
    }
}

async fn get_user_from_token(
    ctx: Arc<Context>,
    access_token: String,
) -> Result<(User, Session), Error> {
    let session = service::auth::verify_access_token(ctx.clone(), access_token)
        .await
        .map_err(|err| match err {
            service::auth::Error::ExpiredToken => Error::ExpiredSession,
            service::auth::Error::InvalidSession => Error::InvalidSession,
            service::auth::Error::UnexpectedError => Error::UnexpectedError,
        })?;

    let user = user::repository::find_by_id(&ctx.db_conn.pool, session.user_id.clone())
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    Ok((user, session))
}

/// The signed in user, resolved from an `Authorization: Bearer <access_token>` header.
#[derive(Serialize, Clone)]
pub struct Auth {
    pub user: User,
    #[serde(skip)]
    pub session: Session,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| Error::InvalidSession.into_response())?;

        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|err| {
                tracing::error!("Context extension missing from request: {}", err);
                Error::UnexpectedError.into_response()
            })?;

        get_user_from_token(ctx, bearer.token().to_string())
            .await
            .map(|(user, session)| Self { user, session })
            .map_err(IntoResponse::into_response)
    }
}
