//! Server settings from environment variables.

use anyhow::Context;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Origins allowed to call the API from a browser.
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SOUSCHEF_BIND_ADDR`: Listen address (default: "0.0.0.0:8000")
    /// - `SOUSCHEF_CORS_ORIGINS`: Comma-separated origins (default: "http://localhost:3000")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            env::var("SOUSCHEF_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let cors_origins =
            env::var("SOUSCHEF_CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string());
        Self::parse(&bind_addr, &cors_origins)
    }

    fn parse(bind_addr: &str, cors_origins: &str) -> anyhow::Result<Self> {
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("Invalid SOUSCHEF_BIND_ADDR: {}", bind_addr))?;

        let cors_origins = cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            bind_addr,
            cors_origins,
        })
    }
}
