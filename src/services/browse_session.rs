//! Client-side browsing state for one user session.
//!
//! Searches may overlap. Each call takes a ticket, and only the most recently
//! issued search may update the session; a response that resolves after a newer
//! search was started is reported as superseded instead of being applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::error::Result;
use crate::models::pagination::Pagination;
use crate::models::region::Regency;
use crate::models::vacancy::{VacancyPage, VacancyRecord};
use crate::services::maganghub_service::{MaganghubService, VacancySearch};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Applied(VacancyPage),
    Superseded { ticket: u64 },
}

#[derive(Debug, Clone)]
struct SessionState {
    search: VacancySearch,
    pagination: Pagination,
}

#[derive(Clone)]
pub struct BrowseSession {
    service: MaganghubService,
    issued: Arc<AtomicU64>,
    state: Arc<Mutex<SessionState>>,
}

impl BrowseSession {
    pub fn new(service: MaganghubService, per_page: u32) -> Self {
        Self {
            service,
            issued: Arc::new(AtomicU64::new(0)),
            state: Arc::new(Mutex::new(SessionState {
                search: VacancySearch::new(per_page),
                pagination: Pagination::single(0),
            })),
        }
    }

    pub async fn pagination(&self) -> Pagination {
        self.state.lock().await.pagination
    }

    pub async fn current_search(&self) -> VacancySearch {
        self.state.lock().await.search.clone()
    }

    /// Runs `search` and makes it the session's current listing unless a newer
    /// search was issued while this one was in flight.
    pub async fn search(&self, search: VacancySearch) -> Result<SearchOutcome> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let page = self.service.search(&search).await?;

        let mut state = self.state.lock().await;
        let latest = self.issued.load(Ordering::SeqCst);
        if latest != ticket {
            debug!(ticket, latest, "Dropping superseded search response");
            return Ok(SearchOutcome::Superseded { ticket });
        }

        state.search = VacancySearch {
            page: page.pagination.current_page,
            ..search
        };
        state.pagination = page.pagination;
        Ok(SearchOutcome::Applied(page))
    }

    /// Re-runs the current filters on another page, clamped to the known range.
    pub async fn go_to(&self, page: u32) -> Result<SearchOutcome> {
        let (search, last_page) = {
            let state = self.state.lock().await;
            (state.search.clone(), state.pagination.last_page)
        };
        self.search(search.at_page(page.clamp(1, last_page.max(1))))
            .await
    }

    pub async fn next_page(&self) -> Result<SearchOutcome> {
        let current = self.pagination().await.current_page;
        self.go_to(current.saturating_add(1)).await
    }

    pub async fn previous_page(&self) -> Result<SearchOutcome> {
        let current = self.pagination().await.current_page;
        self.go_to(current.saturating_sub(1)).await
    }

    pub async fn detail(&self, id: &str) -> Result<VacancyRecord> {
        self.service.fetch_detail(id).await
    }

    pub async fn regencies(&self, province_code: &str) -> Result<Arc<Vec<Regency>>> {
        self.service.regencies(province_code).await
    }
}
