use serde::Deserialize;

use storefront_core::config::Config;

/// Catalog service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3141). Env var: `CATALOG_PORT`.
    #[serde(default = "default_catalog_port")]
    pub catalog_port: u16,
}

fn default_catalog_port() -> u16 {
    3141
}

impl Config for CatalogConfig {}
