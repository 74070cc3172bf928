use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::borrow::Cow;
use std::sync::OnceLock;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

/// `Json<T>` whose rejections share the `{"error": ...}` shape of every other failure.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid request body" })),
                )
                    .into_response())
            }
        }
    }
}

fn phone_number_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\+?\d{10,15}$").expect("Invalid phone number regex"))
}

/// Accepts 10 to 15 digits with an optional leading `+`. Spaces and dashes are ignored.
pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let normalized = phone_number
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect::<String>();

    match phone_number_regex().is_match(&normalized) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_PHONE_NUMBER")
            .with_message(Cow::from("Phone number must contain between 10 and 15 digits"))),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        true => Err(ValidationError::new("BLANK").with_message(Cow::from("Must not be blank"))),
        false => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_local_and_international_phone_numbers() {
        assert!(validate_phone_number("0801234567").is_ok());
        assert!(validate_phone_number("+2348012345678").is_ok());
        assert!(validate_phone_number("080-123 4567").is_ok());
    }

    #[test]
    fn rejects_phone_numbers_with_wrong_digit_count() {
        assert!(validate_phone_number("12345").is_err());
        assert!(validate_phone_number("1234567890123456").is_err());
        assert!(validate_phone_number("080123456a").is_err());
        assert!(validate_phone_number("").is_err());
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("12 Burger Street").is_ok());
    }
}
