use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{info, instrument, warn};
use url::Url;

use crate::config::{Capabilities, Config};
use crate::error::{Endpoint, Error, Result};
use crate::models::region::Regency;
use crate::models::vacancy::{VacancyPage, VacancyRecord};
use crate::services::normalizer;
use crate::services::region_cache::RegionCache;

/// Listing filters as forwarded to the upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancySearch {
    pub page: u32,
    pub per_page: u32,
    pub keyword: String,
    pub province: Option<String>,
    pub regency: Option<String>,
}

impl VacancySearch {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            keyword: String::new(),
            province: None,
            regency: None,
        }
    }

    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }
}

#[derive(Clone)]
pub struct MaganghubService {
    client: Client,
    list_url: Url,
    detail_url: Url,
    region_url: Url,
    capabilities: Capabilities,
    regions: RegionCache,
}

impl MaganghubService {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        let service = Self {
            client,
            list_url: Url::parse(&config.upstream_list_url)?,
            detail_url: Url::parse(&config.upstream_detail_url)?,
            region_url: Url::parse(&config.upstream_region_url)?,
            capabilities: config.capabilities,
            regions: RegionCache::new(),
        };

        info!(
            list_url = %service.list_url,
            regency_filter = service.capabilities.regency_filter,
            detail_view = service.capabilities.detail_view,
            "MagangHub client configured"
        );
        Ok(service)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn listing_url(&self, search: &VacancySearch) -> Url {
        let mut url = self.list_url.clone();
        {
            let per_page = search.per_page.to_string();
            let mut query = url.query_pairs_mut();
            query
                .append_pair("order_by", "jumlah_terdaftar")
                .append_pair("order_direction", "ASC")
                .append_pair("page", &search.page.to_string())
                .append_pair("limit", &per_page)
                .append_pair("per_page", &per_page)
                .append_pair("keyword", search.keyword.trim());

            if let Some(province) = &search.province {
                query.append_pair("kode_provinsi", province);
            }
            if self.capabilities.regency_filter {
                if let Some(regency) = &search.regency {
                    query.append_pair("kode_kabupaten", regency);
                }
            }
        }
        url
    }

    pub fn detail_url(&self, id: &str) -> Result<Url> {
        let mut url = self.detail_url.clone();
        let base = self.detail_url.as_str();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Detail URL cannot take a path: {}", base)))?
            .pop_if_empty()
            .push(id);
        url.query_pairs_mut()
            .append_pair("order_direction", "ASC")
            .append_pair("page", "1")
            .append_pair("limit", "10")
            .append_pair("per_page", "10");
        Ok(url)
    }

    #[instrument(skip(self), fields(page = search.page, per_page = search.per_page))]
    pub async fn search(&self, search: &VacancySearch) -> Result<VacancyPage> {
        let body = self.get_json(self.listing_url(search), Endpoint::Listing).await?;
        let page = normalizer::normalize_listing(&body);
        info!(
            items = page.items.len(),
            total = page.pagination.total,
            last_page = page.pagination.last_page,
            "Fetched vacancy page"
        );
        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn fetch_detail(&self, id: &str) -> Result<VacancyRecord> {
        if !self.capabilities.detail_view {
            return Err(Error::NotFound("Vacancy detail is not available".to_string()));
        }
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::BadRequest("Vacancy id must not be empty".to_string()));
        }

        let body = self.get_json(self.detail_url(id)?, Endpoint::Detail).await?;
        let data = body.get("data").unwrap_or(&Value::Null);
        normalizer::normalize_detail(data).map_err(|err| {
            warn!(id, "Detail response held no vacancy");
            err
        })
    }

    /// Regencies of a province, served from the session cache after the first lookup.
    #[instrument(skip(self))]
    pub async fn regencies(&self, province_code: &str) -> Result<Arc<Vec<Regency>>> {
        if !self.capabilities.regency_filter {
            return Ok(Arc::new(Vec::new()));
        }

        self.regions
            .get_or_fetch(province_code, || async {
                let mut url = self.region_url.clone();
                url.query_pairs_mut()
                    .append_pair("kode_provinsi", province_code);
                let body = self.get_json(url, Endpoint::Regency).await?;
                Ok::<_, Error>(normalizer::normalize_regencies(&body))
            })
            .await
    }

    async fn get_json(&self, url: Url, endpoint: Endpoint) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Unreachable { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                endpoint = endpoint.as_str(),
                status = status.as_u16(),
                "Upstream returned non-success status"
            );
            return Err(Error::Upstream {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| Error::Unreachable { endpoint, source })?;
        serde_json::from_str(&body).map_err(|source| Error::Malformed { endpoint, source })
    }
}
