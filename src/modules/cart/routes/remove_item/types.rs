pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ItemRemoved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemRemoved => (
                    StatusCode::OK,
                    Json(json!({ "message": "Item removed from cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchCart,
        FailedToRemoveItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error fetching cart" })),
                )
                    .into_response(),
                Self::FailedToRemoveItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error removing item from cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
