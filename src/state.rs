use std::sync::Arc;

use crate::auth::{jwt::JwtKeys, repo::UserRepo};
use crate::payments::repo::PaymentRepo;

/// Dependencies shared by every handler. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepo>,
    pub payments: Arc<dyn PaymentRepo>,
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn from_parts(
        users: Arc<dyn UserRepo>,
        payments: Arc<dyn PaymentRepo>,
        jwt: JwtKeys,
    ) -> Self {
        Self {
            users,
            payments,
            jwt,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State over a fresh in-memory store, returned alongside for inspection.
    pub fn fake() -> (Self, Arc<crate::store::memory::MemoryStore>) {
        let store = Arc::new(crate::store::memory::MemoryStore::default());
        let jwt = JwtKeys::new("test-secret", std::time::Duration::from_secs(3600));
        let state = Self::from_parts(store.clone(), store.clone(), jwt);
        (state, store)
    }
}
