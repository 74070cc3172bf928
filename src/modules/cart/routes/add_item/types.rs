pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 1, code = "INVALID_ITEM_ID", message = "Item id is required"))]
        pub item_id: String,
        #[validate(range(
            min = 1,
            max = 1000,
            code = "INVALID_QUANTITY",
            message = "Quantity must be between 1 and 1000"
        ))]
        pub quantity: i32,
    }
}

pub mod response {
    use crate::{modules::cart::repository::CartItem, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ItemAdded(CartItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemAdded(item) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Item added to cart", "item": item })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        ItemNotFound,
        ItemNotAvailable,
        FailedToFetchItem,
        FailedToFetchCart,
        FailedToAddItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::ItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Item not found" })),
                )
                    .into_response(),
                Self::ItemNotAvailable => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Item is not available" })),
                )
                    .into_response(),
                Self::FailedToFetchItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch item" })),
                )
                    .into_response(),
                Self::FailedToFetchCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error fetching cart" })),
                )
                    .into_response(),
                Self::FailedToAddItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error adding item to cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request::Payload;
    use validator::Validate;

    fn payload(quantity: i32) -> Payload {
        Payload {
            item_id: "01JBURGER".to_string(),
            quantity,
        }
    }

    #[test]
    fn quantity_must_be_at_least_one() {
        let errors = payload(0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
        assert!(payload(1).validate().is_ok());
    }

    #[test]
    fn quantity_is_capped() {
        assert!(payload(1000).validate().is_ok());
        assert!(payload(1001).validate().is_err());
    }

    #[test]
    fn item_id_is_required() {
        let errors = Payload {
            item_id: String::new(),
            quantity: 2,
        }
        .validate()
        .unwrap_err();
        assert!(errors.field_errors().contains_key("item_id"));
    }
}
