use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    auth::{
        repo::UserRepo,
        repo_types::{NewUser, User},
    },
    payments::{
        repo::PaymentRepo,
        repo_types::{NewPayment, Payment},
    },
    store::StoreError,
};

/// In-process store with the same uniqueness rules as the database schema.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    payments: Mutex<Vec<Payment>>,
}

impl MemoryStore {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn payments(&self) -> Vec<Payment> {
        self.payments.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_if_absent(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict("email"));
        }
        let stored = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_hash: user.password_hash,
        };
        users.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl PaymentRepo for MemoryStore {
    async fn insert(&self, payment: NewPayment) -> Result<Payment, StoreError> {
        let stored = Payment {
            id: Uuid::new_v4(),
            user_id: payment.user_id,
            payment_method: payment.payment_method,
            account_number: payment.account_number,
            cvv_hash: payment.cvv_hash,
            created_at: OffsetDateTime::now_utc(),
        };
        self.payments.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: None,
            last_name: None,
            email: email.into(),
            password_hash: "$2b$10$placeholder".into(),
        }
    }

    #[tokio::test]
    async fn insert_if_absent_rejects_taken_email() {
        let store = MemoryStore::default();
        store.insert_if_absent(new_user("a@example.com")).await.unwrap();
        let err = store
            .insert_if_absent(new_user("a@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict("email")));
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn find_by_email_is_exact_match() {
        let store = MemoryStore::default();
        let user = store.insert_if_absent(new_user("Case@Example.com")).await.unwrap();
        assert_eq!(
            store.find_by_email("Case@Example.com").await.unwrap().map(|u| u.id),
            Some(user.id)
        );
        assert!(store.find_by_email("case@example.com").await.unwrap().is_none());
    }
}
