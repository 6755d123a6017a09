use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repos::{Account, error::RepoError};
use crate::services::accounts::AccountStore;

/// In-process account store for local runs and tests.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let map = accounts.into_iter().map(|a| (a.id, a)).collect();
        Self {
            accounts: RwLock::new(map),
        }
    }

    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(account.id, account);
    }

    /// Returns false when the account does not exist.
    pub async fn set_active(&self, id: Uuid, is_active: bool) -> bool {
        match self.accounts.write().await.get_mut(&id) {
            Some(account) => {
                account.is_active = is_active;
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: Uuid) -> Option<Account> {
        self.accounts.write().await.remove(&id)
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, RepoError> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }
}
