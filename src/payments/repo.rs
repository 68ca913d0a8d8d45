use async_trait::async_trait;

use crate::payments::repo_types::{NewPayment, Payment};
use crate::store::StoreError;

#[async_trait]
pub trait PaymentRepo: Send + Sync {
    /// Insert a payment; the creation timestamp is assigned by the store.
    async fn insert(&self, payment: NewPayment) -> Result<Payment, StoreError>;
}
