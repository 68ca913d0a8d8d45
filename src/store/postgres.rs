use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::{
    auth::{
        repo::UserRepo,
        repo_types::{NewUser, User},
    },
    config::AppConfig,
    payments::{
        repo::PaymentRepo,
        repo_types::{NewPayment, Payment},
    },
    store::StoreError,
};

/// PostgreSQL-backed store shared by all request handlers.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self::new(db))
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db)
            .await
            .context("run migrations")
    }
}

#[async_trait]
impl UserRepo for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn insert_if_absent(&self, user: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, password_hash
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_optional(&self.db)
        .await?;
        row.ok_or(StoreError::Conflict("email"))
    }
}

#[async_trait]
impl PaymentRepo for PgStore {
    async fn insert(&self, payment: NewPayment) -> Result<Payment, StoreError> {
        let row = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (id, user_id, payment_method, account_number, cvv_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, payment_method, account_number, cvv_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(payment.user_id)
        .bind(&payment.payment_method)
        .bind(&payment.account_number)
        .bind(&payment.cvv_hash)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }
}
