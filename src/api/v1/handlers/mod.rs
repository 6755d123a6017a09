pub mod accounts;
pub mod feed;
pub mod health;
