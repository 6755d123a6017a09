/*
 * Responsibility
 * - the "authenticated identity" type handlers see
 * - the auth gate verifies and inserts it into request extensions; handlers only read it
 *
 * Notes
 * - JWT verification and account lookup belong to middleware/services
 * - keep this as a fixed contract, separate from the gate internals
 */

use crate::repos::Account;

/// Identity attached to a request after the gate admitted it.
///
/// - `account` is the resolved projection (active, no password field)
/// - `token` is the raw credential as presented by the client
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub account: Account,
    pub token: String,
}

impl AuthUser {
    pub fn new(account: Account, token: impl Into<String>) -> Self {
        Self {
            account,
            token: token.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.account.is_admin
    }
}
