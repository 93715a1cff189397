use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub wake: WakeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub download_dir: String,  // files served under /download
    pub projects_file: String, // catalog JSON, re-read on every request
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret_key: Option<String>,
    pub disable_login: bool,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WakeConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let legacy_secret = std::env::var("SECRET_KEY").ok();
        let legacy_disable = std::env::var("DISABLE_LOG_IN")
            .ok()
            .map(|value| parse_flag(&value));

        let config = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.max_body_size", 64 * 1024)?
            .set_default("database.url", "sqlite://users.db")?
            .set_default("storage.download_dir", "static/download_files")?
            .set_default("storage.projects_file", "instance/projects.json")?
            .set_default("auth.disable_login", false)?
            .set_default("auth.bcrypt_cost", 12)?
            .set_default("wake.url", "http://server-pico_server:5000")?
            .set_default("wake.timeout_secs", 5)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.secret_key", legacy_secret)?
            .set_override_option("auth.disable_login", legacy_disable)?
            .build()?;

        config.try_deserialize()
    }
}

/// Only a case-insensitive "true" turns a flag on.
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
