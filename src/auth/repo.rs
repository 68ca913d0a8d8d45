use async_trait::async_trait;

use crate::auth::repo_types::{NewUser, User};
use crate::store::StoreError;

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert the user unless the email is taken, in one atomic step.
    /// A taken email yields `StoreError::Conflict("email")` and writes nothing.
    async fn insert_if_absent(&self, user: NewUser) -> Result<User, StoreError>;
}
