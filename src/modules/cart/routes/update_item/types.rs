pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(range(
            min = 0,
            max = 1000,
            code = "INVALID_QUANTITY",
            message = "Quantity must be between 0 and 1000"
        ))]
        pub quantity: i32,
    }

    #[derive(Debug, PartialEq, Eq)]
    pub enum QuantityChange {
        Remove,
        Set(i32),
    }

    impl Body {
        /// Zero drops the line, matching the cart screen's decrement behaviour.
        pub fn change(&self) -> QuantityChange {
            match self.quantity {
                0 => QuantityChange::Remove,
                quantity => QuantityChange::Set(quantity),
            }
        }
    }

    pub struct Payload {
        pub item_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::cart::repository::CartItem, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        QuantityUpdated(CartItem),
        ItemRemoved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::QuantityUpdated(item) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Item quantity updated", "item": item })),
                )
                    .into_response(),
                Self::ItemRemoved => (
                    StatusCode::OK,
                    Json(json!({ "message": "Item removed from cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        CartItemNotFound,
        FailedToFetchCart,
        FailedToUpdateQuantity,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::CartItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Cart item not found" })),
                )
                    .into_response(),
                Self::FailedToFetchCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error fetching cart" })),
                )
                    .into_response(),
                Self::FailedToUpdateQuantity => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error updating item quantity" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request::{Body, QuantityChange};
    use super::response::Error;
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::Validate;

    #[test]
    fn negative_quantity_is_rejected() {
        let errors = Body { quantity: -1 }.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn zero_quantity_is_valid_and_removes_the_line() {
        let body = Body { quantity: 0 };
        assert!(body.validate().is_ok());
        assert_eq!(body.change(), QuantityChange::Remove);
    }

    #[test]
    fn positive_quantity_sets_the_line() {
        let body = Body { quantity: 3 };
        assert!(body.validate().is_ok());
        assert_eq!(body.change(), QuantityChange::Set(3));
        assert!(Body { quantity: 1001 }.validate().is_err());
    }

    #[test]
    fn unknown_cart_item_is_not_found() {
        let response = Error::CartItemNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
