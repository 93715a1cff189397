// Application error type and result alias, built on thiserror.
use thiserror::Error;

pub mod response;

#[derive(Error, Debug)]
pub enum AppError {
    // Rendered as a redirect to the index, never as a distinct "forbidden" page.
    #[error("Not authorized")]
    Unauthorized,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;
