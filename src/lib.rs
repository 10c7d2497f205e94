pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::services::maganghub_service::MaganghubService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub maganghub_service: MaganghubService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let maganghub_service = MaganghubService::new(config)?;

        Ok(Self {
            config: Arc::new(config.clone()),
            maganghub_service,
        })
    }
}
