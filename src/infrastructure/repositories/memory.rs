// src/infrastructure/repositories/memory.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    FieldValue, Locale, QueryPredicate, Record, RecordStore, ResourceId, ResourceKey, Slug,
    SlugRepository, SlugText,
};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

struct StoredSlug {
    id: i64,
    slug: String,
    locale: String,
    resource_key: Option<String>,
    resource_id: Option<String>,
}

impl StoredSlug {
    fn to_record(&self) -> Record {
        let nullable =
            |value: &Option<String>| value.clone().map_or(FieldValue::Null, FieldValue::Text);
        Record::new()
            .field("id", self.id)
            .field("slug", self.slug.as_str())
            .field("locale", self.locale.as_str())
            .field("resource_key", nullable(&self.resource_key))
            .field("resource_id", nullable(&self.resource_id))
    }

    fn to_slug(&self) -> DomainResult<Slug> {
        let mut slug = Slug::new(
            SlugText::new(self.slug.clone())?,
            Locale::new(self.locale.clone())?,
        );
        if let Some(key) = &self.resource_key {
            slug = slug.with_resource_key(ResourceKey::new(key.clone())?);
        }
        if let Some(id) = &self.resource_id {
            slug = slug.with_resource_id(ResourceId::new(id.clone())?);
        }
        Ok(slug)
    }
}

#[derive(Default)]
struct Table {
    rows: Vec<StoredSlug>,
    next_id: i64,
}

/// Reference implementation of the slug store: a mutex-guarded table.
/// The find-then-write sequence in `save` runs under one lock, which
/// serializes writers the way the unique index does for SQLite.
#[derive(Default)]
pub struct InMemorySlugRepository {
    table: Mutex<Table>,
}

impl InMemorySlugRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SlugRepository for InMemorySlugRepository {
    async fn save(&self, slug: Slug) -> DomainResult<Slug> {
        if !slug.locale.fits_storage() {
            return Err(DomainError::Validation(format!(
                "locale '{}' exceeds the stored maximum of {} characters",
                slug.locale,
                Locale::MAX_STORED_LEN
            )));
        }

        let mut table = self.lock();
        let existing = table
            .rows
            .iter_mut()
            .find(|row| row.slug == slug.text.as_str() && row.locale == slug.locale.as_str());

        match existing {
            Some(row) => {
                // Re-saving rewires resource ownership; text, locale and
                // id stay untouched.
                row.resource_key = slug.resource_key.as_ref().map(ToString::to_string);
                row.resource_id = slug.resource_id.as_ref().map(ToString::to_string);
            }
            None => {
                table.next_id += 1;
                let id = table.next_id;
                table.rows.push(StoredSlug {
                    id,
                    slug: slug.text.as_str().to_string(),
                    locale: slug.locale.as_str().to_string(),
                    resource_key: slug.resource_key.as_ref().map(ToString::to_string),
                    resource_id: slug.resource_id.as_ref().map(ToString::to_string),
                });
            }
        }

        Ok(slug)
    }

    async fn delete(&self, slug: Slug) -> DomainResult<Slug> {
        let mut table = self.lock();
        table
            .rows
            .retain(|row| !(row.slug == slug.text.as_str() && row.locale == slug.locale.as_str()));
        Ok(slug)
    }

    async fn find(&self, text: &SlugText, locale: &Locale) -> DomainResult<Option<Slug>> {
        let table = self.lock();
        table
            .rows
            .iter()
            .find(|row| row.slug == text.as_str() && row.locale == locale.as_str())
            .map(StoredSlug::to_slug)
            .transpose()
    }
}

#[async_trait]
impl RecordStore for InMemorySlugRepository {
    async fn count(&self, predicate: &QueryPredicate) -> DomainResult<u64> {
        let table = self.lock();
        let count = table
            .rows
            .iter()
            .filter(|row| predicate.matches(&row.to_record()))
            .count();
        Ok(count as u64)
    }

    async fn find_one(&self, predicate: &QueryPredicate) -> DomainResult<Option<Record>> {
        let table = self.lock();
        Ok(table
            .rows
            .iter()
            .map(StoredSlug::to_record)
            .find(|record| predicate.matches(record)))
    }
}

/// Arbitrary keyed rows behind the [`RecordStore`] contract. Backs
/// repository resources whose slugs live inside entity tables (a blog
/// table with a slug column, say) rather than in the slugs table.
#[derive(Default)]
pub struct InMemoryRecordStore {
    rows: Mutex<Vec<Record>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Record>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn push(&self, record: Record) {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn count(&self, predicate: &QueryPredicate) -> DomainResult<u64> {
        let rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        let count = rows
            .iter()
            .filter(|record| predicate.matches(record))
            .count();
        Ok(count as u64)
    }

    async fn find_one(&self, predicate: &QueryPredicate) -> DomainResult<Option<Record>> {
        let rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.iter().find(|record| predicate.matches(record)).cloned())
    }
}
