pub mod request {
    use crate::modules::payment::repository::PaymentMethod;
    use crate::utils::validation::{validate_not_blank, validate_phone_number};
    use serde::Deserialize;
    use validator::Validate;

    /// Collected only to confirm a card was supplied; never persisted.
    #[derive(Deserialize, Default)]
    pub struct CardDetails {
        #[serde(default)]
        pub card_number: String,
        #[serde(default)]
        pub expiry_date: String,
        #[serde(default)]
        pub cvv: String,
        #[serde(default)]
        pub card_holder_name: String,
    }

    impl CardDetails {
        pub fn is_complete(&self) -> bool {
            [
                &self.card_number,
                &self.expiry_date,
                &self.cvv,
                &self.card_holder_name,
            ]
            .iter()
            .all(|field| !field.trim().is_empty())
        }
    }

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(custom(
            function = "validate_not_blank",
            code = "INVALID_ADDRESS",
            message = "Address is required"
        ))]
        pub address: String,
        #[validate(custom(function = "validate_phone_number"))]
        pub phone_number: String,
        pub payment_method: PaymentMethod,
        pub card: Option<CardDetails>,
    }

    impl Payload {
        pub fn has_required_card_details(&self) -> bool {
            match self.payment_method {
                PaymentMethod::CashOnDelivery => true,
                PaymentMethod::Card => self
                    .card
                    .as_ref()
                    .map(CardDetails::is_complete)
                    .unwrap_or(false),
            }
        }
    }
}

pub mod response {
    use crate::{modules::order::service::PlacedOrder, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        OrderPlaced(PlacedOrder),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderPlaced(placed) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "order": { "order_number": placed.order.order_number },
                        "summary": placed.summary,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        CardDetailsRequired,
        CartEmpty,
        FailedToFetchCart,
        FailedToCreateOrder,
        FailedToAddOrderItems,
        FailedToCreatePaymentRecord,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::CardDetailsRequired => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Please fill in all card details." })),
                )
                    .into_response(),
                Self::CartEmpty => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Cart is empty" })),
                )
                    .into_response(),
                Self::FailedToFetchCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Could not find cart" })),
                )
                    .into_response(),
                Self::FailedToCreateOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create order" })),
                )
                    .into_response(),
                Self::FailedToAddOrderItems => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to add order items" })),
                )
                    .into_response(),
                Self::FailedToCreatePaymentRecord => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create payment record" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An unknown error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request::{CardDetails, Payload};
    use super::response::Error;
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::Validate;

    fn payload(value: serde_json::Value) -> Payload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn cash_on_delivery_needs_no_card() {
        let payload = payload(json!({
            "address": "12 Burger Street",
            "phone_number": "08012345678",
            "payment_method": "COD",
        }));

        assert!(payload.validate().is_ok());
        assert!(payload.has_required_card_details());
    }

    #[test]
    fn card_payment_requires_every_card_field() {
        let missing = payload(json!({
            "address": "12 Burger Street",
            "phone_number": "08012345678",
            "payment_method": "Card",
        }));
        assert!(!missing.has_required_card_details());

        let partial = payload(json!({
            "address": "12 Burger Street",
            "phone_number": "08012345678",
            "payment_method": "Card",
            "card": { "card_number": "4111111111111111", "cvv": "123" },
        }));
        assert!(!partial.has_required_card_details());

        let complete = payload(json!({
            "address": "12 Burger Street",
            "phone_number": "08012345678",
            "payment_method": "Card",
            "card": {
                "card_number": "4111111111111111",
                "expiry_date": "12/27",
                "cvv": "123",
                "card_holder_name": "Jo Doe",
            },
        }));
        assert!(complete.has_required_card_details());
    }

    #[test]
    fn blank_address_and_short_phone_number_fail_validation() {
        let payload = payload(json!({
            "address": "  ",
            "phone_number": "12345",
            "payment_method": "COD",
        }));

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("address"));
        assert!(fields.contains_key("phone_number"));
    }

    #[test]
    fn empty_card_details_are_incomplete() {
        assert!(!CardDetails::default().is_complete());
    }

    #[test]
    fn empty_cart_is_a_bad_request() {
        let response = Error::CartEmpty.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_payment_method_does_not_deserialize() {
        let result = serde_json::from_value::<Payload>(json!({
            "address": "12 Burger Street",
            "phone_number": "08012345678",
            "payment_method": "Paypal",
        }));
        assert!(result.is_err());
    }
}
