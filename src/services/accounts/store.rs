//! Account store interface used by the auth gate.
use async_trait::async_trait;
use uuid::Uuid;

use crate::repos::{Account, error::RepoError};

/// Lookup-by-id over whatever holds the accounts.
///
/// Implementations return the projection without any password or secret field and
/// must be shareable across requests (`Arc<dyn AccountStore>` in `AppState`).
///
/// Returns:
/// - `Ok(Some(_))` account exists
/// - `Ok(None)`    no account for this id
/// - `Err(_)`      backend failure (never treated as "not found")
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    // Backend name for logging.
    fn backend_name(&self) -> &'static str;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, RepoError>;
}
