use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    refilled_at: Instant,
}

/// Token bucket shared by every route it wraps.
///
/// Holds up to `per_second` tokens and regains them continuously at the same
/// rate, so a burst drains it and steady traffic is paced. Each request served
/// here costs one upstream call, so the bucket also caps the load this service
/// puts on MagangHub.
#[derive(Clone, Debug)]
pub struct RequestBudget {
    rate: f64,
    bucket: Arc<Mutex<Bucket>>,
}

impl RequestBudget {
    pub fn new(per_second: u32) -> Self {
        let rate = f64::from(per_second.max(1));
        Self {
            rate,
            bucket: Arc::new(Mutex::new(Bucket {
                tokens: rate,
                refilled_at: Instant::now(),
            })),
        }
    }

    /// Takes one token, or reports how long until one is available.
    fn take(&self, now: Instant) -> Result<(), Duration> {
        let mut bucket = self
            .bucket
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let elapsed = now.saturating_duration_since(bucket.refilled_at);
        if !elapsed.is_zero() {
            bucket.tokens = (bucket.tokens + elapsed.as_secs_f64() * self.rate).min(self.rate);
            bucket.refilled_at = now;
        }

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            Ok(())
        } else {
            Err(Duration::from_secs_f64((1.0 - bucket.tokens) / self.rate))
        }
    }
}

pub async fn budget_middleware(
    State(budget): State<RequestBudget>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if let Err(wait) = budget.take(Instant::now()) {
        let retry_after = wait.as_secs_f64().ceil().max(1.0) as u64;
        tracing::warn!(path = %req.uri().path(), retry_after, "Request budget exhausted");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::RETRY_AFTER, retry_after.to_string())],
            Json(json!({ "error": "rate_limit_exceeded" })),
        )
            .into_response();
    }
    next.run(req).await
}
