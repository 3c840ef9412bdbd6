use std::env;

use anyhow::Context;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> anyhow::Result<Self> {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());

        Self::from_parts(ip, &port)
    }

    fn from_parts(ip: String, port: &str) -> anyhow::Result<Self> {
        let port = port
            .trim()
            .parse::<u16>()
            .with_context(|| format!("SERVICE_PORT must be a port number, got {port:?}"))?;
        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
