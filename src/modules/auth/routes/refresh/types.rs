pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub refresh_token: String,
    }
}

pub mod response {
    use crate::modules::auth::repository::session::Session;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Refreshed(Session),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Refreshed(session) => (
                    StatusCode::OK,
                    Json(json!({
                        "access_token": session.access_token,
                        "refresh_token": session.refresh_token,
                        "access_token_expires_at": session.access_token_expires_at,
                        "refresh_token_expires_at": session.refresh_token_expires_at,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidSession,
        ExpiredSession,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidSession => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Invalid refresh token" })),
                )
                    .into_response(),
                Self::ExpiredSession => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Session expired, please sign in again" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sorry, an error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
