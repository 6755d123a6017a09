/*
 * Responsibility
 * - the request authentication gate (RequireAuth / RequireAdmin / OptionalAuth)
 * - re-exports for app/routes wiring
 */
pub mod access;
pub mod extract;

pub use access::{Policy, admit, apply, authenticate, optional_auth, require_admin, require_auth};
pub use extract::extract_token;
