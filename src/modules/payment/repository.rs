use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::fmt;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    #[serde(rename = "COD")]
    CashOnDelivery,
    #[serde(rename = "Card")]
    Card,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CashOnDelivery => write!(f, "COD"),
            PaymentMethod::Card => write!(f, "Card"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "Pending"),
        }
    }
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub amount: BigDecimal,
    pub method: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

pub struct CreatePaymentPayload {
    pub order_id: String,
    pub amount: BigDecimal,
    pub method: PaymentMethod,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreatePaymentPayload,
) -> Result<Payment, Error> {
    sqlx::query_as::<_, Payment>(
        "
        INSERT INTO payments (
            id,
            order_id,
            amount,
            method,
            status
        )
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.order_id.clone())
    .bind(payload.amount)
    .bind(payload.method.to_string())
    .bind(PaymentStatus::Pending.to_string())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create payment record for order {}: {}",
            payload.order_id,
            err
        );
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_uses_storefront_codes() {
        assert_eq!(PaymentMethod::CashOnDelivery.to_string(), "COD");
        assert_eq!(PaymentMethod::Card.to_string(), "Card");
    }

    #[test]
    fn payment_method_deserializes_from_json_codes() {
        let method: PaymentMethod = serde_json::from_str("\"COD\"").unwrap();
        assert_eq!(method, PaymentMethod::CashOnDelivery);
        assert!(serde_json::from_str::<PaymentMethod>("\"Paypal\"").is_err());
    }
}
