mod auth;

pub use auth::{Caller, enforce_disabled_auth};
