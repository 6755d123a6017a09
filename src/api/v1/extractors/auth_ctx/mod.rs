/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - hand the identity attached by the auth gate (AuthUser) to handlers
 * - axum glue lives in core, the type lives in types
 *
 * Public API:
 * - AuthUser
 * - CurrentUser
 * - MaybeUser
 */

mod core;
mod types;

pub use core::{CurrentUser, MaybeUser};
pub use types::AuthUser;
