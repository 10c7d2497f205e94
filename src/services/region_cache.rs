use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::models::region::Regency;

/// Indonesia has 38 provinces; anything past this is not a real code.
const MAX_PROVINCES: usize = 64;

/// Province code to regency list, kept for the lifetime of its owner.
///
/// Failed and empty lookups are not cached, so the next request for that
/// province goes back to the upstream. At most [`MAX_PROVINCES`] entries are kept.
#[derive(Clone, Default)]
pub struct RegionCache {
    entries: Arc<RwLock<HashMap<String, Arc<Vec<Regency>>>>>,
}

impl RegionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, province_code: &str) -> Option<Arc<Vec<Regency>>> {
        self.entries.read().await.get(province_code).cloned()
    }

    pub async fn get_or_fetch<F, Fut>(
        &self,
        province_code: &str,
        fetch: F,
    ) -> Result<Arc<Vec<Regency>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Regency>>>,
    {
        if let Some(hit) = self.get(province_code).await {
            debug!(province_code, "Regency cache hit");
            return Ok(hit);
        }

        let fetched = Arc::new(fetch().await?);
        if fetched.is_empty() {
            debug!(province_code, "Empty regency list not cached");
            return Ok(fetched);
        }

        let mut entries = self.entries.write().await;
        if entries.len() >= MAX_PROVINCES && !entries.contains_key(province_code) {
            debug!(province_code, "Regency cache full, serving uncached");
            return Ok(fetched);
        }
        // A concurrent lookup may have landed first; keep whichever is stored.
        let stored = entries
            .entry(province_code.to_string())
            .or_insert_with(|| fetched.clone());
        Ok(stored.clone())
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Endpoint, Error};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn bandung() -> Vec<Regency> {
        vec![Regency {
            code: "3273".into(),
            name: "KOTA BANDUNG".into(),
        }]
    }

    #[tokio::test]
    async fn fetches_once_per_province() {
        let cache = RegionCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let regencies = cache
                .get_or_fetch("32", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, Error>(bandung())
                })
                .await
                .unwrap();
            assert_eq!(regencies.as_slice(), bandung().as_slice());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cache = RegionCache::new();

        let err = cache
            .get_or_fetch("32", || async {
                Err::<Vec<Regency>, _>(Error::Upstream {
                    endpoint: Endpoint::Regency,
                    status: 503,
                })
            })
            .await;
        assert!(err.is_err());
        assert!(cache.is_empty().await);

        let ok = cache
            .get_or_fetch("32", || async { Ok::<_, Error>(bandung()) })
            .await;
        tokio_test::assert_ok!(ok);
        assert!(cache.get("32").await.is_some());
    }

    #[tokio::test]
    async fn empty_lookups_are_not_cached() {
        let cache = RegionCache::new();

        let empty = cache
            .get_or_fetch("77", || async { Ok::<_, Error>(Vec::new()) })
            .await
            .unwrap();
        assert!(empty.is_empty());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn cache_stops_growing_at_capacity() {
        let cache = RegionCache::new();

        for code in 0..MAX_PROVINCES + 10 {
            let fetched = cache
                .get_or_fetch(&code.to_string(), || async { Ok::<_, Error>(bandung()) })
                .await;
            tokio_test::assert_ok!(fetched);
        }

        assert_eq!(cache.len().await, MAX_PROVINCES);
    }
}
