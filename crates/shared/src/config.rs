//! Application configuration management.

use serde::Deserialize;

/// Environment variable that overrides `cors.front_url`.
pub const FRONT_URL_VAR: &str = "FRONT_URL";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Cross-origin configuration.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Image storage configuration.
    #[serde(default)]
    pub images: ImagesConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Run pending migrations when the server starts.
    #[serde(default = "default_auto_migrate")]
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    /// Config for the given URL with default pool settings.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            auto_migrate: default_auto_migrate(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite:mercari.sqlite3?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_auto_migrate() -> bool {
    true
}

/// Cross-origin configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// The single origin allowed to call the API from a browser.
    #[serde(default = "default_front_url")]
    pub front_url: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            front_url: default_front_url(),
        }
    }
}

fn default_front_url() -> String {
    "http://localhost:3000".to_string()
}

/// Image storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfig {
    /// Directory holding the content-addressed image files.
    #[serde(default = "default_images_dir")]
    pub dir: String,
    /// File served when a requested image does not exist.
    #[serde(default = "default_image")]
    pub default_image: String,
    /// Upper bound on a request body carrying an upload.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            dir: default_images_dir(),
            default_image: default_image(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_images_dir() -> String {
    "images".to_string()
}

fn default_image() -> String {
    "default.jpg".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024 // 10MB
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Later sources win: `config/default`, `config/{RUN_MODE}`,
    /// `BAZAAR__*` variables, then `FRONT_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("BAZAAR")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("cors.front_url", std::env::var(FRONT_URL_VAR).ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Address the server binds to, as `host:port`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
