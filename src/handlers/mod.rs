mod auth;
mod index;
mod download;
mod api;
mod pages;

pub use auth::{serve_login_page, handle_login, serve_signup_page, handle_signup, handle_logout};
pub use index::{index, IndexView};
pub use download::download;
pub use api::{change_role, delete_user, wake};
