use std::env;
use std::net::SocketAddr;

use eyre::{WrapErr, bail};

/// Which document store backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Memory,
}

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageBackend,
    pub bucket: String,
    pub region: String,
    pub jwt_secret: String,
    pub bind_addr: SocketAddr,
    /// Set when running inside AWS Lambda.
    pub lambda: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let storage = match lookup("POSTCARE_STORAGE").as_deref() {
            None | Some("s3") => StorageBackend::S3,
            Some("memory") => StorageBackend::Memory,
            Some(other) => bail!("POSTCARE_STORAGE must be `s3` or `memory`, got `{other}`"),
        };

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| eyre::eyre!("JWT_SECRET is not set"))?;

        let bind_addr = lookup("POSTCARE_BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:5000".to_string())
            .parse()
            .wrap_err("POSTCARE_BIND_ADDR is not a socket address")?;

        Ok(Self {
            storage,
            bucket: lookup("POSTCARE_BUCKET").unwrap_or_else(|| "postcare".to_string()),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            jwt_secret,
            bind_addr,
            lambda: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
