// src/infrastructure/repositories/sqlite_slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    FieldValue, Locale, QueryPredicate, Record, RecordStore, ResourceId, ResourceKey, Slug,
    SlugRepository, SlugText,
};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

/// Columns a predicate may constrain on the slugs table. Anything else is
/// rejected before it reaches SQL.
const QUERYABLE_COLUMNS: [&str; 5] = ["id", "slug", "locale", "resource_key", "resource_id"];

const SELECT_ROW: &str = "SELECT id, slug, locale, resource_key, resource_id FROM slugs";

/// Durable slug rows in SQLite. The write path relies on the unique index
/// over `(slug, locale)`: `save` is a single upsert statement, so a losing
/// concurrent insert becomes the update path instead of a duplicate row.
///
/// Also a [`RecordStore`], so the same table can back a repository
/// resource for directory lookups.
#[derive(Clone)]
pub struct SqliteSlugRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSlugRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SlugRow {
    id: i64,
    slug: String,
    locale: String,
    resource_key: Option<String>,
    resource_id: Option<String>,
}

impl TryFrom<SlugRow> for Slug {
    type Error = DomainError;

    fn try_from(row: SlugRow) -> Result<Self, Self::Error> {
        let mut slug = Slug::new(SlugText::new(row.slug)?, Locale::new(row.locale)?);
        if let Some(key) = row.resource_key {
            slug = slug.with_resource_key(ResourceKey::new(key)?);
        }
        if let Some(id) = row.resource_id {
            slug = slug.with_resource_id(ResourceId::new(id)?);
        }
        Ok(slug)
    }
}

impl From<SlugRow> for Record {
    fn from(row: SlugRow) -> Self {
        let nullable = |value: Option<String>| value.map_or(FieldValue::Null, FieldValue::Text);
        Record::new()
            .field("id", row.id)
            .field("slug", row.slug)
            .field("locale", row.locale)
            .field("resource_key", nullable(row.resource_key))
            .field("resource_id", nullable(row.resource_id))
    }
}

fn push_predicate<'a>(
    builder: &mut QueryBuilder<'a, Sqlite>,
    predicate: &'a QueryPredicate,
) -> DomainResult<()> {
    for (index, (column, value)) in predicate.constraints().iter().enumerate() {
        if !QUERYABLE_COLUMNS.contains(&column.as_str()) {
            return Err(DomainError::Validation(format!(
                "column '{column}' cannot be queried on the slugs table"
            )));
        }
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        builder.push(column.as_str());
        match value {
            FieldValue::Text(text) => {
                builder.push(" = ");
                builder.push_bind(text.as_str());
            }
            FieldValue::Int(int) => {
                builder.push(" = ");
                builder.push_bind(*int);
            }
            FieldValue::Null => {
                builder.push(" IS NULL");
            }
        }
    }
    Ok(())
}

#[async_trait]
impl SlugRepository for SqliteSlugRepository {
    async fn save(&self, slug: Slug) -> DomainResult<Slug> {
        if !slug.locale.fits_storage() {
            return Err(DomainError::Validation(format!(
                "locale '{}' exceeds the stored maximum of {} characters",
                slug.locale,
                Locale::MAX_STORED_LEN
            )));
        }

        sqlx::query(
            "INSERT INTO slugs (slug, locale, resource_key, resource_id) VALUES (?, ?, ?, ?) \
             ON CONFLICT(slug, locale) DO UPDATE \
             SET resource_key = excluded.resource_key, resource_id = excluded.resource_id",
        )
        .bind(slug.text.as_str())
        .bind(slug.locale.as_str())
        .bind(slug.resource_key.as_ref().map(ResourceKey::as_str))
        .bind(slug.resource_id.as_ref().map(ResourceId::as_str))
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(slug)
    }

    async fn delete(&self, slug: Slug) -> DomainResult<Slug> {
        let result = sqlx::query("DELETE FROM slugs WHERE slug = ? AND locale = ?")
            .bind(slug.text.as_str())
            .bind(slug.locale.as_str())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        // Deleting a slug that was never stored is a no-op success.
        if result.rows_affected() == 0 {
            tracing::debug!(slug = %slug.text, locale = %slug.locale, "delete matched no row");
        }

        Ok(slug)
    }

    async fn find(&self, text: &SlugText, locale: &Locale) -> DomainResult<Option<Slug>> {
        let row = sqlx::query_as::<_, SlugRow>(
            "SELECT id, slug, locale, resource_key, resource_id FROM slugs \
             WHERE slug = ? AND locale = ?",
        )
        .bind(text.as_str())
        .bind(locale.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Slug::try_from).transpose()
    }
}

#[async_trait]
impl RecordStore for SqliteSlugRepository {
    async fn count(&self, predicate: &QueryPredicate) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(1) FROM slugs");
        push_predicate(&mut builder, predicate)?;

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn find_one(&self, predicate: &QueryPredicate) -> DomainResult<Option<Record>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ROW);
        push_predicate(&mut builder, predicate)?;
        builder.push(" LIMIT 1");

        let row = builder
            .build_query_as::<SlugRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(Record::from))
    }
}
