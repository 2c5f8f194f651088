// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use waypost::application::ports::time::Clock;
use waypost::domain::errors::{DomainError, DomainResult};
use waypost::domain::slug::{Locale, ResourceKey, Slug, SlugResource, SlugText};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp shared by every test.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// A resource whose backing store is down; every lookup fails.
pub struct FailingResource;

#[async_trait]
impl SlugResource for FailingResource {
    async fn slug_exists(&self, _: &SlugText, _: &Locale) -> DomainResult<bool> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn find_slug(&self, _: &SlugText, _: &Locale) -> DomainResult<Option<Slug>> {
        Err(DomainError::Persistence("store offline".into()))
    }

    fn key(&self) -> Option<ResourceKey> {
        None
    }

    fn priority(&self) -> i32 {
        100
    }
}

/// Counts lookups and never resolves anything. For proving a consultation
/// did (or did not) reach this resource.
pub struct CountingResource {
    calls: Arc<AtomicUsize>,
    priority: i32,
}

impl CountingResource {
    pub fn new(calls: Arc<AtomicUsize>, priority: i32) -> Self {
        Self { calls, priority }
    }
}

#[async_trait]
impl SlugResource for CountingResource {
    async fn slug_exists(&self, _: &SlugText, _: &Locale) -> DomainResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    }

    async fn find_slug(&self, _: &SlugText, _: &Locale) -> DomainResult<Option<Slug>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }

    fn key(&self) -> Option<ResourceKey> {
        None
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
