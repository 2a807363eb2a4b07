use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

/// Application configuration for employee-service.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

/// PostgreSQL connection settings.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Flat environment variables (DB_HOST, DB_USER, JWT_SECRET, PORT, ...)
    /// 2. Nested environment variables (DATABASE__HOST, SERVER__HTTP_PORT, ...)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 3000)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.password", "")?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.expiration_hours", auth::DEFAULT_TOKEN_LIFETIME_HOURS)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__HOST=db overrides database.host
            .add_source(Environment::default().separator("__"))
            .set_override_option("database.host", env::var("DB_HOST").ok())?
            .set_override_option("database.port", env::var("DB_PORT").ok())?
            .set_override_option("database.user", env::var("DB_USER").ok())?
            .set_override_option("database.password", env::var("DB_PASSWORD").ok())?
            .set_override_option("database.name", env::var("DB_NAME").ok())?
            .set_override_option("jwt.secret", env::var("JWT_SECRET").ok())?
            .set_override_option("server.http_port", env::var("PORT").ok())?
            .build()?;

        configuration.try_deserialize()
    }
}

impl DatabaseConfig {
    /// Connection options for the configured database.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}
