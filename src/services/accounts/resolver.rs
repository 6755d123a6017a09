use uuid::Uuid;

use crate::error::AuthError;
use crate::repos::Account;
use crate::services::accounts::AccountStore;

/// Fetch the account behind a verified subject and check that it may sign in.
///
/// The single `.await` of the gate; nothing is attached to the request until it returns.
pub async fn resolve_account(store: &dyn AccountStore, id: Uuid) -> Result<Account, AuthError> {
    let account = store
        .find_by_id(id)
        .await?
        .ok_or(AuthError::AccountNotFound)?;

    if !account.is_active {
        return Err(AuthError::AccountDeactivated);
    }

    Ok(account)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::repos::error::RepoError;
    use crate::services::accounts::MemoryAccountStore;

    fn account(is_active: bool) -> Account {
        Account {
            id: Uuid::new_v4(),
            email: "kim@example.com".into(),
            user_name: "kim".into(),
            is_active,
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    struct DownStore;

    #[async_trait]
    impl AccountStore for DownStore {
        fn backend_name(&self) -> &'static str {
            "down"
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, RepoError> {
            Err(RepoError::Unavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn active_account_resolves() {
        let acc = account(true);
        let store = MemoryAccountStore::with_accounts([acc.clone()]);

        let resolved = resolve_account(&store, acc.id).await.unwrap();
        assert_eq!(resolved, acc);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = MemoryAccountStore::new();
        let err = resolve_account(&store, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AuthError::AccountNotFound));
    }

    #[tokio::test]
    async fn inactive_account_is_deactivated() {
        let acc = account(false);
        let store = MemoryAccountStore::with_accounts([acc.clone()]);

        let err = resolve_account(&store, acc.id).await.unwrap_err();
        assert!(matches!(err, AuthError::AccountDeactivated));
    }

    #[tokio::test]
    async fn store_failure_is_not_reported_as_missing_account() {
        let err = resolve_account(&DownStore, Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_infrastructure());
    }

    #[tokio::test]
    async fn removed_account_is_not_found() {
        let acc = account(true);
        let store = MemoryAccountStore::new();
        store.insert(acc.clone()).await;
        assert!(resolve_account(&store, acc.id).await.is_ok());

        assert_eq!(store.remove(acc.id).await, Some(acc.clone()));
        let err = resolve_account(&store, acc.id).await.unwrap_err();
        assert!(matches!(err, AuthError::AccountNotFound));
    }

    #[tokio::test]
    async fn repeated_resolution_yields_same_outcome() {
        let acc = account(true);
        let store = MemoryAccountStore::with_accounts([acc.clone()]);

        for _ in 0..3 {
            assert_eq!(resolve_account(&store, acc.id).await.unwrap(), acc);
        }
    }
}
