pub mod browse_session;
pub mod maganghub_service;
pub mod normalizer;
pub mod region_cache;
