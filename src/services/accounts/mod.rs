pub mod memory;
pub mod resolver;
pub mod store;

pub use memory::MemoryAccountStore;
pub use resolver::resolve_account;
pub use store::AccountStore;
