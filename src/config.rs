//! Server settings come from the environment (optionally via `.env`). The
//! API base URL is not one of them; see `config_store`.

use anyhow::{Context, Result};
use std::{env, net::SocketAddr};

pub const API_BASE_COOKIE: &str = "api_base";

/// Ten years, which is as close to "forever" as browsers honor.
pub const API_BASE_MAX_AGE_SECS: u64 = 10 * 365 * 24 * 60 * 60;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let raw = env::var("RENTALS_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw
            .parse()
            .with_context(|| format!("RENTALS_LISTEN_ADDR is not a socket address: {raw}"))?;

        Ok(Config { listen_addr })
    }
}
