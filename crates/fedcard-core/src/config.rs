use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{DEFAULT_MAX_PAGE_LIMIT, DEFAULT_PAGE_LIMIT};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub database: Option<DatabaseConfig>,
    pub auth: AuthConfig,
    pub contacts: ContactsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// User ids seeded into the in-memory directory.
    #[serde(default)]
    pub users: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u8,
}

const fn default_max_connections() -> u8 {
    4
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    SingleUser,
    BasicAuth,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    #[serde(default)]
    pub admins: Vec<AdminCredential>,
    pub single_user: Option<SingleUserAuthConfig>,
}

/// An administrator allowed through basic auth.
#[derive(Clone, Deserialize)]
pub struct AdminCredential {
    pub name: String,
    /// Argon2 PHC string, see the `hash_password` binary.
    pub password_hash: String,
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential")
            .field("name", &self.name)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingleUserAuthConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactsConfig {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Self::builder()?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Returns a builder holding every built-in default.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8699)?
            .set_default("logging.level", "info")?
            .set_default("storage.backend", "memory")?
            .set_default("auth.method", "basic_auth")?
            .set_default("contacts.default_limit", i64::try_from(DEFAULT_PAGE_LIMIT)?)?
            .set_default("contacts.max_limit", i64::try_from(DEFAULT_MAX_PAGE_LIMIT)?)?)
    }

    /// ## Summary
    /// Checks cross-field requirements serde cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` describing the first problem found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.storage.backend == StorageBackend::Postgres && self.database.is_none() {
            return Err(CoreError::ConfigError(
                "storage.backend = postgres requires a [database] section".to_string(),
            ));
        }

        match self.auth.method {
            AuthMethod::BasicAuth if self.auth.admins.is_empty() => {
                return Err(CoreError::ConfigError(
                    "auth.method = basic_auth requires at least one entry in auth.admins"
                        .to_string(),
                ));
            }
            AuthMethod::SingleUser if self.auth.single_user.is_none() => {
                return Err(CoreError::ConfigError(
                    "auth.method = single_user requires an [auth.single_user] section".to_string(),
                ));
            }
            AuthMethod::BasicAuth | AuthMethod::SingleUser => {}
        }

        if self.contacts.default_limit == 0 || self.contacts.default_limit > self.contacts.max_limit
        {
            return Err(CoreError::ConfigError(
                "contacts.default_limit must be between 1 and contacts.max_limit".to_string(),
            ));
        }

        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
