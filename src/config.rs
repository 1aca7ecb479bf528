use std::{env, fmt::Display, net::IpAddr, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{anyhow, Result};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub theme_path: PathBuf,
    pub banner_interval: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            host: try_load("INKWELL_HOST", "127.0.0.1")?,
            port: try_load("INKWELL_PORT", "3001")?,
            theme_path: try_load("INKWELL_THEME_PATH", ".inkwell-theme.json")?,
            banner_interval: Duration::from_secs(try_load("INKWELL_BANNER_INTERVAL_SECS", "5")?),
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("Environment misconfigured: {key}={raw}: {e}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_fall_back_to_defaults() {
        let port: u16 = try_load("INKWELL_TEST_UNSET_PORT", "3001").unwrap();
        assert_eq!(port, 3001);
    }

    #[test]
    fn malformed_values_are_rejected() {
        env::set_var("INKWELL_TEST_BAD_PORT", "not-a-port");
        let port: Result<u16> = try_load("INKWELL_TEST_BAD_PORT", "3001");
        assert!(port.is_err());
    }
}
