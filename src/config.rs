use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

pub const DEFAULT_LIST_URL: &str =
    "https://maganghub.kemnaker.go.id/be/v1/api/list/vacancies-aktif";
pub const DEFAULT_DETAIL_URL: &str =
    "https://maganghub.kemnaker.go.id/be/v1/api/list/vacancies-aktif";
pub const DEFAULT_REGION_URL: &str = "https://maganghub.kemnaker.go.id/be/v1/api/list/kabupaten";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub upstream_list_url: String,
    pub upstream_detail_url: String,
    pub upstream_region_url: String,
    pub default_per_page: u32,
    pub max_per_page: u32,
    pub public_rps: u32,
    pub http_timeout_secs: u64,
    pub capabilities: Capabilities,
}

/// Optional parts of the directory that can be switched off per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub regency_filter: bool,
    pub detail_view: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            regency_filter: true,
            detail_view: true,
        }
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let config = Self {
            server_address: get_env("SERVER_ADDRESS")?,
            upstream_list_url: get_env_or("UPSTREAM_LIST_URL", DEFAULT_LIST_URL),
            upstream_detail_url: get_env_or("UPSTREAM_DETAIL_URL", DEFAULT_DETAIL_URL),
            upstream_region_url: get_env_or("UPSTREAM_REGION_URL", DEFAULT_REGION_URL),
            default_per_page: get_env_parse_or("DEFAULT_PER_PAGE", 20)?,
            max_per_page: get_env_parse_or("MAX_PER_PAGE", 100)?,
            public_rps: get_env_parse_or("PUBLIC_RPS", 20)?,
            http_timeout_secs: get_env_parse_or("HTTP_TIMEOUT_SECS", 15)?,
            capabilities: Capabilities {
                regency_filter: get_env_parse_or("ENABLE_REGENCY_FILTER", true)?,
                detail_view: get_env_parse_or("ENABLE_DETAIL_VIEW", true)?,
            },
        };

        if config.default_per_page == 0 || config.default_per_page > config.max_per_page {
            return Err(Error::Config(format!(
                "DEFAULT_PER_PAGE must be between 1 and {}",
                config.max_per_page
            )));
        }

        Ok(config)
    }

    /// Config pointing every upstream at `base`, used by tests and local fakes.
    pub fn with_upstream(server_address: impl Into<String>, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            server_address: server_address.into(),
            upstream_list_url: format!("{}/vacancies", base),
            upstream_detail_url: format!("{}/vacancies", base),
            upstream_region_url: format!("{}/regencies", base),
            default_per_page: 20,
            max_per_page: 100,
            public_rps: 100,
            http_timeout_secs: 5,
            capabilities: Capabilities::default(),
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
