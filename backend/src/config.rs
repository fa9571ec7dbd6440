//! Application configuration.
//!
//! All runtime settings are read from environment variables once, at the
//! composition root in `main.rs`, and handed to the Actix application as
//! `web::Data<AppConfig>`. Nothing in the codebase reaches for ambient
//! configuration after startup; the commerce settings in particular are
//! only reachable through the explicitly constructed `CommerceClient`.

use std::env;

/// Top-level server configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Bind address for the HTTP server.
    pub host: String,
    pub port: u16,
    /// Path of the SQLite file holding the template registry.
    pub database_path: String,
    /// Directory where uploaded profile photos and logos are stored.
    pub assets_dir: String,
    /// Externally visible base URL, used when deriving profile and QR
    /// image links embedded in rendered markup and exported vCards.
    pub public_base_url: String,
    pub commerce: CommerceConfig,
}

/// Settings for the third-party commerce platform the storefront
/// delegates checkout to.
#[derive(Clone)]
pub struct CommerceConfig {
    /// Shop domain, e.g. `cardsmith-store.myshopify.com`.
    pub shop_domain: String,
    /// Storefront API access token. Unused for cart permalinks but kept
    /// with the rest of the commerce settings so the client owns all of
    /// them.
    pub storefront_token: String,
}

impl AppConfig {
    /// Reads the configuration from the environment, with defaults suited
    /// to local development.
    pub fn from_env() -> Self {
        let host = env_or("CARDSMITH_HOST", "127.0.0.1");
        let port = env::var("CARDSMITH_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let public_base_url = env::var("CARDSMITH_PUBLIC_URL")
            .unwrap_or_else(|_| format!("http://{}:{}", host, port));

        AppConfig {
            database_path: env_or("CARDSMITH_DB", "cardsmith.sqlite"),
            assets_dir: env_or("CARDSMITH_ASSETS_DIR", "./assets"),
            public_base_url,
            commerce: CommerceConfig {
                shop_domain: env_or("CARDSMITH_SHOP_DOMAIN", "cardsmith-store.myshopify.com"),
                storefront_token: env_or("CARDSMITH_STOREFRONT_TOKEN", ""),
            },
            host,
            port,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
