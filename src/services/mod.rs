mod user_store;
mod catalog;
mod wake;
pub mod session;

pub use user_store::{UserStore, hash_password, verify_password};
pub use catalog::Catalog;
pub use wake::WakeClient;
