use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let raw_addr =
            std::env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());
        let server_addr = Self::parse_addr(&raw_addr)?;

        Ok(Self {
            database_url,
            server_addr,
        })
    }

    fn parse_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
        raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
            name: "SERVER_ADDR".to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
    }
}
