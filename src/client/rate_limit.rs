//! Reactive request throttling
//!
//! Limiters stay idle until the service answers 429, then pace every later
//! request of the same class. Reads and writes are throttled independently
//! since the service meters them separately.

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;

use super::request::HttpMethod;

/// Class of request for throttling purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestClass {
    /// GET requests - 10 req/sec once throttled
    Read,
    /// POST, PUT, PATCH and DELETE - 2 req/sec once throttled
    Write,
}

impl RequestClass {
    pub const ALL: [RequestClass; 2] = [RequestClass::Read, RequestClass::Write];

    pub fn from_method(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => RequestClass::Read,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch | HttpMethod::Delete => {
                RequestClass::Write
            }
        }
    }

    /// Requests per second allowed while throttled.
    pub fn rate_limit(&self) -> u32 {
        match self {
            RequestClass::Read => 10,
            RequestClass::Write => 2,
        }
    }
}

/// Limiter for one request class.
pub struct ClassRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    active: AtomicBool,
    class: RequestClass,
}

impl ClassRateLimiter {
    pub fn new(class: RequestClass) -> Self {
        let per_second = NonZeroU32::new(class.rate_limit()).unwrap_or(NonZeroU32::MIN);

        Self {
            limiter: RateLimiter::direct(Quota::per_second(per_second)),
            active: AtomicBool::new(false),
            class,
        }
    }

    /// Start pacing requests. Idempotent.
    pub fn activate(&self) {
        if !self.active.swap(true, Ordering::SeqCst) {
            debug!("Throttling activated for {:?} requests", self.class);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Wait for a permit if throttling is active; return immediately otherwise.
    pub async fn wait_if_active(&self) {
        if self.is_active() {
            debug!("Waiting for {:?} rate limiter", self.class);
            self.limiter.until_ready().await;
        }
    }
}

/// One limiter per request class, shared by every call through a dispatcher.
pub struct RateLimiterSet {
    limiters: HashMap<RequestClass, ClassRateLimiter>,
}

impl Default for RateLimiterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimiterSet {
    pub fn new() -> Self {
        let limiters = RequestClass::ALL
            .into_iter()
            .map(|class| (class, ClassRateLimiter::new(class)))
            .collect();
        Self { limiters }
    }

    pub async fn wait_for(&self, class: RequestClass) {
        if let Some(limiter) = self.limiters.get(&class) {
            limiter.wait_if_active().await;
        }
    }

    /// Activate throttling for a class (called on 429).
    pub fn activate(&self, class: RequestClass) {
        if let Some(limiter) = self.limiters.get(&class) {
            limiter.activate();
        }
    }

    pub fn is_active(&self, class: RequestClass) -> bool {
        self.limiters
            .get(&class)
            .is_some_and(ClassRateLimiter::is_active)
    }
}
