use super::types::response;
use crate::{
    modules::auth::{middleware::Auth, service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    service::auth::end_session(ctx, auth.session)
        .await
        .map_err(|_| response::Error::SignOutFailed)?;

    tracing::debug!("User {} signed out", auth.user.id);

    Ok(response::Success::SignedOut)
}
