use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BOOKING_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Artificial delay before a submitted booking lands in the store.
    pub booking_delay_ms: u64,
    /// Optional JSON roster replacing the built-in catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            booking_delay_ms: DEFAULT_BOOKING_DELAY_MS,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            host: env::var("APP_HOST")
                .unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_var("APP_PORT", DEFAULT_PORT),
            booking_delay_ms: parse_var("BOOKING_DELAY_MS", DEFAULT_BOOKING_DELAY_MS),
            catalog_path: env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        };

        if config.catalog_path.is_none() {
            warn!("CATALOG_PATH not set, using built-in doctor roster");
        }

        config
    }

    pub fn booking_delay(&self) -> Duration {
        Duration::from_millis(self.booking_delay_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", name, default);
            default
        }
    }
}
