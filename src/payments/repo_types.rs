use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Payment instrument record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub payment_method: String,
    pub account_number: String,   // masked, only the last 4 characters survive
    pub cvv_hash: Option<String>, // None for UPI or when no cvv was given
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub user_id: Uuid,
    pub payment_method: String,
    pub account_number: String,
    pub cvv_hash: Option<String>,
}
