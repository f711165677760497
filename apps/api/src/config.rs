use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a multipart request body, in bytes.
    pub max_upload_bytes: usize,
}

const MIB: usize = 1024 * 1024;

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 25 * MIB,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            Err(_) => defaults.port,
        };

        let max_upload_bytes = match std::env::var("MAX_UPLOAD_MB") {
            Ok(raw) => {
                let mb = raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;
                if mb == 0 {
                    bail!("MAX_UPLOAD_MB must be at least 1");
                }
                mb * MIB
            }
            Err(_) => defaults.max_upload_bytes,
        };

        Ok(Config {
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes,
        })
    }
}
