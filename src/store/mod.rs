//! Datastore backends for users and payments.
//!
//! `PgStore` is the production backend. `MemoryStore` backs the unit tests.

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write. Holds the constrained field.
    #[error("duplicate {0}")]
    Conflict(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
