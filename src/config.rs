use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:57765";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:57765";

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    pub log_dir: Option<PathBuf>,
    pub http_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 57765)),
            log_dir: None,
            http_timeout: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(url) = lookup("VCDS_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            cfg.api_base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(addr) = lookup("VCDS_BIND_ADDR") {
            cfg.bind_addr = addr
                .trim()
                .parse()
                .with_context(|| format!("VCDS_BIND_ADDR is not a socket address: {addr}"))?;
        }

        cfg.log_dir = lookup("VCDS_LOG_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        if let Some(secs) = lookup("VCDS_HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("VCDS_HTTP_TIMEOUT_SECS is not a number: {secs}"))?;
            cfg.http_timeout = Some(Duration::from_secs(secs));
        }

        Ok(cfg)
    }
}
