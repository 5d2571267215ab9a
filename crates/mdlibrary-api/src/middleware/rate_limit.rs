//! Sliding-window rate limiter middleware.
//!
//! Each scope owns an independent limiter that records the arrival times of
//! admitted requests per client. A request is admitted when fewer than the
//! threshold arrivals fall inside the trailing window. Clients with no
//! arrival inside the window are swept out at most once per window.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::{self as axum_middleware, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::MethodRouter;
use dashmap::DashMap;
use tokio::time::Instant;
use tracing::{debug, warn};

use mdlibrary_core::config::RateLimitConfig;
use mdlibrary_core::error::AppError;
use mdlibrary_core::types::RateScope;

use crate::error::{ApiError, RATE_LIMITED_MESSAGE};
use crate::state::AppState;

/// Client key used when the peer address is unavailable.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Per-client sliding log limiter for one scope.
#[derive(Debug)]
pub struct RateLimiter {
    scope: RateScope,
    limit: usize,
    window: Duration,
    /// Client → arrival times of admitted requests, oldest first.
    hits: DashMap<String, VecDeque<Instant>>,
    /// Earliest time the next idle-client sweep may run.
    next_sweep: Mutex<Instant>,
}

impl RateLimiter {
    /// Creates a limiter admitting `limit` requests per `window`.
    pub fn new(scope: RateScope, limit: u32, window: Duration) -> Self {
        Self {
            scope,
            limit: limit as usize,
            window,
            hits: DashMap::new(),
            next_sweep: Mutex::new(Instant::now() + window),
        }
    }

    /// The scope this limiter guards.
    pub fn scope(&self) -> RateScope {
        self.scope
    }

    /// Records a request for `client` if it fits in the window.
    ///
    /// Rejected requests are not recorded.
    pub fn check(&self, client: &str) -> bool {
        let now = Instant::now();
        let admitted = {
            let mut log = self.hits.entry(client.to_string()).or_default();

            while log
                .front()
                .is_some_and(|&oldest| now.duration_since(oldest) >= self.window)
            {
                log.pop_front();
            }

            if log.len() < self.limit {
                log.push_back(now);
                true
            } else {
                false
            }
        };

        self.sweep_idle(now);
        admitted
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.hits.len()
    }

    /// Drops clients whose newest arrival has left the window.
    fn sweep_idle(&self, now: Instant) {
        let Ok(mut next_sweep) = self.next_sweep.try_lock() else {
            return;
        };
        if now < *next_sweep {
            return;
        }
        *next_sweep = now + self.window;

        let before = self.hits.len();
        self.hits.retain(|_, log| {
            log.back()
                .is_some_and(|&newest| now.duration_since(newest) < self.window)
        });
        debug!(
            scope = %self.scope,
            evicted = before.saturating_sub(self.hits.len()),
            "Swept idle rate limit entries"
        );
    }

    /// Like [`check`](Self::check), but logs and returns an error on rejection.
    pub fn admit(&self, client: &str, endpoint: &str) -> Result<(), AppError> {
        if self.check(client) {
            return Ok(());
        }
        warn!(scope = %self.scope, endpoint, ip = client, "Rate limit exceeded");
        Err(AppError::rate_limit(RATE_LIMITED_MESSAGE))
    }
}

/// One limiter per scope, built from configuration.
#[derive(Debug)]
pub struct RateLimitRegistry {
    limiters: Vec<Arc<RateLimiter>>,
}

impl RateLimitRegistry {
    /// Creates a limiter for every scope.
    pub fn from_config(config: &RateLimitConfig) -> Self {
        let window = Duration::from_secs(config.window_seconds);
        let limiters = RateScope::ALL
            .into_iter()
            .map(|scope| Arc::new(RateLimiter::new(scope, config.threshold(scope), window)))
            .collect();
        Self { limiters }
    }

    /// The limiter for `scope`.
    pub fn get(&self, scope: RateScope) -> Arc<RateLimiter> {
        let index = RateScope::ALL
            .iter()
            .position(|candidate| *candidate == scope)
            .unwrap_or(RateScope::ALL.len() - 1);
        Arc::clone(&self.limiters[index])
    }
}

/// The peer IP of the request, or [`UNKNOWN_CLIENT`].
pub fn client_ip(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Rejects the request with 429 before the handler runs when over the limit.
pub async fn enforce(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_ip(&request);
    match limiter.admit(&client, request.uri().path()) {
        Ok(()) => next.run(request).await,
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Guards a single method route with `limiter`.
pub fn limited(route: MethodRouter<AppState>, limiter: Arc<RateLimiter>) -> MethodRouter<AppState> {
    route.layer(axum_middleware::from_fn_with_state(limiter, enforce))
}
