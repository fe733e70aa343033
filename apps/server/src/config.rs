use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use treasury_core::tables::REFERENCE_ANNUAL_TARGET;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub annual_target: Decimal,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        // TD_LISTEN_ADDR wins; a bare PORT (as set by hosting platforms) binds all interfaces.
        let listen_addr = match (std::env::var("TD_LISTEN_ADDR"), std::env::var("PORT")) {
            (Ok(addr), _) => addr,
            (Err(_), Ok(port)) => format!("0.0.0.0:{}", port.trim()),
            _ => "0.0.0.0:8080".to_string(),
        };
        let listen_addr: SocketAddr = listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address '{}'", listen_addr))?;

        let annual_target = match std::env::var("TD_ANNUAL_TARGET") {
            Ok(raw) => Decimal::from_str(raw.trim())
                .with_context(|| format!("Invalid TD_ANNUAL_TARGET '{}'", raw))?,
            Err(_) => REFERENCE_ANNUAL_TARGET,
        };

        let cors_allow = std::env::var("TD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = match std::env::var("TD_REQUEST_TIMEOUT_MS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid TD_REQUEST_TIMEOUT_MS '{}'", raw))?,
            Err(_) => 30000,
        };
        let static_dir = std::env::var("TD_STATIC_DIR").unwrap_or_else(|_| "dist".into());

        Ok(Self {
            listen_addr,
            annual_target,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
        })
    }
}
