pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    use crate::utils::validation::validate_not_blank;

    #[derive(Deserialize, Validate)]
    pub struct Filters {
        #[validate(custom(
            function = "validate_not_blank",
            code = "INVALID_SEARCH_QUERY",
            message = "Search query must not be empty"
        ))]
        #[serde(default)]
        pub query: String,
    }

    pub struct Payload {
        pub filters: Filters,
    }
}

pub mod response {
    pub use crate::modules::search::repository::SearchResults;
    use crate::utils::validation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Result(SearchResults),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Result(res) => (StatusCode::OK, Json(json!(res))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        SearchFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::SearchFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to perform search" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
