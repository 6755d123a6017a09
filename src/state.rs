/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 *   - tokens: TokenVerifier (read-only secret), accounts: AccountStore
 * - cheap to Clone (everything behind Arc)
 */
use std::fmt;
use std::sync::Arc;

use crate::services::{accounts::AccountStore, auth::TokenVerifier};

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenVerifier>,
    pub accounts: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(tokens: Arc<TokenVerifier>, accounts: Arc<dyn AccountStore>) -> Self {
        Self { tokens, accounts }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("accounts", &self.accounts.backend_name())
            .finish()
    }
}
