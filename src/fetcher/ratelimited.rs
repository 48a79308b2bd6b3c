use std::num::NonZeroU32;
use std::sync::Arc;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use tracing::{Instrument, debug_span};

use super::{FetchResult, PageFetcher};

/// Paces requests of an inner fetcher through a shared rate limiter
#[derive(Clone)]
pub struct RateLimitedFetcher<F> {
    inner: F,
    limiter: Arc<DefaultDirectRateLimiter>,
}

impl<F: PageFetcher> RateLimitedFetcher<F> {
    pub fn new(inner: F, limiter: DefaultDirectRateLimiter) -> Self {
        Self {
            inner,
            limiter: Arc::new(limiter),
        }
    }

    /// Allow at most `requests` fetches per minute, without bursts
    pub fn per_minute(inner: F, requests: NonZeroU32) -> Self {
        let quota = Quota::per_minute(requests).allow_burst(NonZeroU32::MIN);
        Self::new(inner, RateLimiter::direct(quota))
    }
}

impl<F: PageFetcher + Sync> PageFetcher for RateLimitedFetcher<F> {
    async fn fetch(&self, url: &str) -> FetchResult {
        self.limiter.until_ready().instrument(debug_span!("limiter")).await;
        self.inner.fetch(url).await
    }
}
