// src/config.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
    /// Upper bound for request bodies (image uploads included).
    pub max_body_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub schema_path: String,
    /// Insert the sample listings when the `properties` table is empty.
    pub seed_sample_data: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Local,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub bucket: String,
    /// Directory holding buckets for the `local` backend.
    pub local_root: String,
    /// URL prefix the `local` backend hands out for uploaded objects.
    pub public_base_url: String,
    /// Base URL of the storage service for the `http` backend.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub session_ttl_secs: i64,
    pub min_password_len: usize,
    /// Adds `Secure` to the session cookie. Off for plain-http development.
    pub cookie_secure: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Most images one add-listing draft may hold.
    pub max_draft_images: usize,
    /// Seconds between sweeps of drafts whose session has expired.
    pub draft_sweep_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_workers: 8,
            max_body_bytes: 20 * 1024 * 1024,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "skyline.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            seed_sample_data: true,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Local,
            bucket: "property-images".to_string(),
            local_root: "storage".to_string(),
            public_base_url: "/storage".to_string(),
            endpoint: None,
            api_key: None,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: 60 * 60 * 24 * 7, // 7 days
            min_password_len: 6,
            cookie_secure: false,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_draft_images: 20,
            draft_sweep_secs: 300,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `skyline.toml`,
    /// and `SKYLINE_*` environment variables (e.g. `SKYLINE_SERVER__PORT=8080`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name("skyline").required(false))
            .add_source(
                config::Environment::with_prefix("SKYLINE")
                    .prefix_separator("_")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
