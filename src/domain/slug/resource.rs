// src/domain/slug/resource.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::entity::Slug;
use crate::domain::slug::store::{QueryPredicate, Record, RecordStore};
use crate::domain::slug::value_objects::{Locale, ResourceId, ResourceKey, SlugText};
use async_trait::async_trait;
use std::sync::Arc;

/// Priority assigned to resources that do not declare one. Higher
/// priorities are consulted first.
pub const DEFAULT_PRIORITY: i32 = 1000;

/// A prioritized provider of slug lookups. Resources do not own slugs;
/// they expose some backing store through the directory's query contract.
/// How a resource treats the requested locale (exact match, prefix
/// fallback, or ignored) is its own decision; the directory only
/// forwards the query.
#[async_trait]
pub trait SlugResource: Send + Sync {
    async fn slug_exists(&self, text: &SlugText, locale: &Locale) -> DomainResult<bool>;

    async fn find_slug(&self, text: &SlugText, locale: &Locale) -> DomainResult<Option<Slug>>;

    /// Static identity of the resource type, if it has one.
    fn key(&self) -> Option<ResourceKey>;

    fn priority(&self) -> i32;
}

impl std::fmt::Debug for dyn SlugResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlugResource")
            .field("key", &self.key())
            .field("priority", &self.priority())
            .finish()
    }
}

/// Builds the store query for a slug lookup. Pluggable so a locale can
/// live in a dedicated column, inside a translated payload, or nowhere,
/// without changing the resource's algorithm.
pub trait PredicateBuilder: Send + Sync {
    fn build(&self, text: &SlugText, locale: &Locale) -> QueryPredicate;
}

/// Default query shape: constrain the slug column only.
#[derive(Debug, Clone)]
pub struct SlugOnlyPredicate {
    slug_column: String,
}

impl SlugOnlyPredicate {
    pub fn new(slug_column: impl Into<String>) -> Self {
        Self {
            slug_column: slug_column.into(),
        }
    }
}

impl Default for SlugOnlyPredicate {
    fn default() -> Self {
        Self::new("slug")
    }
}

impl PredicateBuilder for SlugOnlyPredicate {
    fn build(&self, text: &SlugText, _locale: &Locale) -> QueryPredicate {
        QueryPredicate::new().eq(self.slug_column.clone(), text.as_str())
    }
}

/// Constrains the locale column as well, but only when the requested
/// locale is non-empty; an empty locale always queries locale-free.
#[derive(Debug, Clone)]
pub struct LocaleScopedPredicate {
    slug_column: String,
    locale_column: String,
}

impl LocaleScopedPredicate {
    pub fn new(slug_column: impl Into<String>, locale_column: impl Into<String>) -> Self {
        Self {
            slug_column: slug_column.into(),
            locale_column: locale_column.into(),
        }
    }
}

impl Default for LocaleScopedPredicate {
    fn default() -> Self {
        Self::new("slug", "locale")
    }
}

impl PredicateBuilder for LocaleScopedPredicate {
    fn build(&self, text: &SlugText, locale: &Locale) -> QueryPredicate {
        let predicate = QueryPredicate::new().eq(self.slug_column.clone(), text.as_str());
        if locale.is_independent() {
            predicate
        } else {
            predicate.eq(self.locale_column.clone(), locale.as_str())
        }
    }
}

/// Derives the resource key and id from a matched row. The closed
/// strategy replacing per-resource callables: either a constant key, or
/// per-row column reads.
pub trait ResourceExtractor: Send + Sync {
    /// Resource key for a matched row, or the static key when called
    /// without one.
    fn key(&self, record: Option<&Record>) -> Option<ResourceKey>;

    fn id(&self, record: &Record) -> Option<ResourceId>;
}

/// Fixed resource key, no id.
#[derive(Debug, Clone, Default)]
pub struct ConstantExtractor {
    key: Option<ResourceKey>,
}

impl ConstantExtractor {
    pub fn new(key: Option<ResourceKey>) -> Self {
        Self { key }
    }
}

impl ResourceExtractor for ConstantExtractor {
    fn key(&self, _record: Option<&Record>) -> Option<ResourceKey> {
        self.key.clone()
    }

    fn id(&self, _record: &Record) -> Option<ResourceId> {
        None
    }
}

/// Reads key and id from named row columns; absent or null columns yield
/// `None`.
#[derive(Debug, Clone)]
pub struct ColumnExtractor {
    key_column: String,
    id_column: String,
}

impl ColumnExtractor {
    pub fn new(key_column: impl Into<String>, id_column: impl Into<String>) -> Self {
        Self {
            key_column: key_column.into(),
            id_column: id_column.into(),
        }
    }
}

impl Default for ColumnExtractor {
    fn default() -> Self {
        Self::new("resource_key", "resource_id")
    }
}

impl ResourceExtractor for ColumnExtractor {
    fn key(&self, record: Option<&Record>) -> Option<ResourceKey> {
        let record = record?;
        let value = record.text(&self.key_column)?;
        ResourceKey::new(value).ok()
    }

    fn id(&self, record: &Record) -> Option<ResourceId> {
        let value = record.text(&self.id_column)?;
        ResourceId::new(value).ok()
    }
}

/// How a repository-backed resource interprets the requested locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocaleResolution {
    /// Locale never constrains the lookup.
    #[default]
    Ignore,
    /// Exactly the requested locale; an empty locale queries locale-free.
    Exact,
    /// The requested locale, then successively broader parents
    /// ("de-CH" -> "de"), then the locale-independent form.
    Fallback,
}

impl LocaleResolution {
    /// Candidate locales to try, in order.
    pub fn candidates(self, locale: &Locale) -> Vec<Locale> {
        match self {
            LocaleResolution::Ignore => vec![Locale::independent()],
            LocaleResolution::Exact => vec![locale.clone()],
            LocaleResolution::Fallback => {
                let mut chain = vec![locale.clone()];
                let mut current = locale.clone();
                while let Some(parent) = current.parent() {
                    chain.push(parent.clone());
                    current = parent;
                }
                if !locale.is_independent() {
                    chain.push(Locale::independent());
                }
                chain
            }
        }
    }
}

/// A slug resource backed by any [`RecordStore`] of entities that carry
/// an already-slugified value: the slugs table itself, or any entity
/// table whose rows embed their slug.
pub struct RepositoryResource {
    store: Arc<dyn RecordStore>,
    extractor: Arc<dyn ResourceExtractor>,
    predicate: Arc<dyn PredicateBuilder>,
    locale_resolution: LocaleResolution,
    priority: i32,
}

impl RepositoryResource {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            extractor: Arc::new(ConstantExtractor::default()),
            predicate: Arc::new(SlugOnlyPredicate::default()),
            locale_resolution: LocaleResolution::default(),
            priority: DEFAULT_PRIORITY,
        }
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn ResourceExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_predicate(mut self, predicate: Arc<dyn PredicateBuilder>) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn with_locale_resolution(mut self, resolution: LocaleResolution) -> Self {
        self.locale_resolution = resolution;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[async_trait]
impl SlugResource for RepositoryResource {
    async fn slug_exists(&self, text: &SlugText, locale: &Locale) -> DomainResult<bool> {
        for candidate in self.locale_resolution.candidates(locale) {
            let predicate = self.predicate.build(text, &candidate);
            if self.store.count(&predicate).await? > 0 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn find_slug(&self, text: &SlugText, locale: &Locale) -> DomainResult<Option<Slug>> {
        for candidate in self.locale_resolution.candidates(locale) {
            let predicate = self.predicate.build(text, &candidate);
            let Some(record) = self.store.find_one(&predicate).await? else {
                continue;
            };

            // The found slug reports the locale the caller asked for,
            // not the candidate that happened to hit.
            let mut slug = Slug::new(text.clone(), locale.clone());
            if let Some(key) = self.extractor.key(Some(&record)) {
                slug = slug.with_resource_key(key);
            }
            if let Some(id) = self.extractor.id(&record) {
                slug = slug.with_resource_id(id);
            }
            return Ok(Some(slug));
        }
        Ok(None)
    }

    fn key(&self) -> Option<ResourceKey> {
        self.extractor.key(None)
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// A fixed, in-memory set of slug texts under one resource key. Locale
/// is ignored entirely: every entry matches any requested locale.
pub struct ArrayResource {
    slugs: Vec<SlugText>,
    key: Option<ResourceKey>,
    priority: i32,
}

impl ArrayResource {
    pub fn new(slugs: Vec<SlugText>, key: Option<ResourceKey>) -> Self {
        Self {
            slugs,
            key,
            priority: DEFAULT_PRIORITY,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    fn contains(&self, text: &SlugText) -> bool {
        self.slugs.iter().any(|slug| slug == text)
    }
}

#[async_trait]
impl SlugResource for ArrayResource {
    async fn slug_exists(&self, text: &SlugText, _locale: &Locale) -> DomainResult<bool> {
        Ok(self.contains(text))
    }

    async fn find_slug(&self, text: &SlugText, locale: &Locale) -> DomainResult<Option<Slug>> {
        if !self.contains(text) {
            return Ok(None);
        }

        let mut slug = Slug::new(text.clone(), locale.clone());
        if let Some(key) = &self.key {
            slug = slug.with_resource_key(key.clone());
        }
        Ok(Some(slug))
    }

    fn key(&self) -> Option<ResourceKey> {
        self.key.clone()
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_candidates_walk_parents_then_independent() {
        let locale = Locale::new("de-CH").unwrap();
        let chain: Vec<_> = LocaleResolution::Fallback
            .candidates(&locale)
            .iter()
            .map(|l| l.as_str().to_string())
            .collect();
        assert_eq!(chain, ["de-CH", "de", ""]);

        let independent = LocaleResolution::Fallback.candidates(&Locale::independent());
        assert_eq!(independent, vec![Locale::independent()]);
    }

    #[test]
    fn exact_candidates_are_single() {
        let locale = Locale::new("en").unwrap();
        assert_eq!(LocaleResolution::Exact.candidates(&locale), vec![locale]);
        assert_eq!(
            LocaleResolution::Ignore.candidates(&Locale::new("en").unwrap()),
            vec![Locale::independent()]
        );
    }

    #[test]
    fn locale_scoped_predicate_skips_empty_locale() {
        let builder = LocaleScopedPredicate::default();
        let text = SlugText::new("about-us").unwrap();

        let scoped = builder.build(&text, &Locale::new("en").unwrap());
        assert_eq!(scoped.constraints().len(), 2);

        let free = builder.build(&text, &Locale::independent());
        assert_eq!(free.constraints().len(), 1);
    }

    #[test]
    fn column_extractor_reads_row_fields() {
        let extractor = ColumnExtractor::default();
        let record = Record::new()
            .field("resource_key", "blog")
            .field("resource_id", "5");
        assert_eq!(
            extractor.key(Some(&record)).unwrap().as_str(),
            "blog"
        );
        assert_eq!(extractor.id(&record).unwrap().as_str(), "5");
        assert!(extractor.key(None).is_none());
    }
}
