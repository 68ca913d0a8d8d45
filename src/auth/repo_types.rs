use sqlx::FromRow;
use uuid::Uuid;

/// The columns of a user row needed to authenticate it.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String, // bcrypt hash
}

/// Values for a user that has not been written yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password_hash: String,
}
