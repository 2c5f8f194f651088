// src/domain/slug/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::entity::Slug;
use crate::domain::slug::value_objects::{Locale, SlugText};
use async_trait::async_trait;

/// Write-side port for durable slug rows, keyed by `(text, locale)`.
///
/// Concrete stores usually also implement
/// [`RecordStore`](crate::domain::slug::store::RecordStore) so the same
/// backing table can answer repository-based resource lookups.
#[async_trait]
pub trait SlugRepository: Send + Sync {
    /// Inserts the slug, or rewires the resource key and id of the row
    /// already holding `(text, locale)`. Repeated identical saves keep the
    /// row count unchanged, including under concurrent writers.
    async fn save(&self, slug: Slug) -> DomainResult<Slug>;

    /// Removes the row matching `(text, locale)` exactly. Deleting a slug
    /// that was never stored is not an error.
    async fn delete(&self, slug: Slug) -> DomainResult<Slug>;

    async fn find(&self, text: &SlugText, locale: &Locale) -> DomainResult<Option<Slug>>;
}
