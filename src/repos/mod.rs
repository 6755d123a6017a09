pub mod account_repo;
pub mod error;

pub use account_repo::{Account, PgAccountStore};
