use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use atelier_models::email_address::EmailAddressWithName;
use config::{Environment, File, FileFormat};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration from the files listed in the `ATELIER_CONFIG`
/// environment variable (colon separated), falling back to the default config
/// file. Individual values can be overridden via `ATELIER_*` environment
/// variables, e.g. `ATELIER_EMAIL__SMTP_URL`.
pub fn load() -> anyhow::Result<Config> {
    let paths = match std::env::var("ATELIER_CONFIG") {
        Ok(var) => var.split(':').map(PathBuf::from).collect(),
        Err(_) => vec![PathBuf::from(DEFAULT_CONFIG_PATH)],
    };
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(Environment::with_prefix("ATELIER").separator("__"))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub health: HealthConfig,
    pub contact: ContactConfig,
    pub quote: QuoteConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddressWithName,
    pub send_timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub inbox: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct QuoteConfig {
    pub inbox: EmailAddressWithName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
    }
}
