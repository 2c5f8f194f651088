// src/infrastructure/resources.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    ColumnExtractor, LocaleResolution, LocaleScopedPredicate, RecordStore, RepositoryResource,
    ResourceResolver, SlugResource,
};
use std::sync::Arc;

/// Name under which the slugs-table resource is registered.
pub const REPOSITORY_RESOURCE: &str = "repository";

const DEFAULT_REPOSITORY_PRIORITY: i32 = 100;

/// Resolves the resource names accepted in configuration. Only
/// `repository` is known today: the slugs table itself, queried with an
/// exact locale and row-level key/id extraction.
pub struct AppResourceResolver {
    store: Arc<dyn RecordStore>,
}

impl AppResourceResolver {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    fn repository_resource(
        &self,
        args: &[(String, String)],
    ) -> DomainResult<Arc<dyn SlugResource>> {
        let mut priority = DEFAULT_REPOSITORY_PRIORITY;
        for (arg, value) in args {
            match arg.as_str() {
                "priority" => {
                    priority = value.parse().map_err(|_| {
                        DomainError::Configuration(format!(
                            "invalid priority '{value}' for slug resource '{REPOSITORY_RESOURCE}'"
                        ))
                    })?;
                }
                other => {
                    return Err(DomainError::Configuration(format!(
                        "unknown argument '{other}' for slug resource '{REPOSITORY_RESOURCE}'"
                    )));
                }
            }
        }

        Ok(Arc::new(
            RepositoryResource::new(self.store.clone())
                .with_extractor(Arc::new(ColumnExtractor::default()))
                .with_predicate(Arc::new(LocaleScopedPredicate::default()))
                .with_locale_resolution(LocaleResolution::Exact)
                .with_priority(priority),
        ))
    }
}

impl ResourceResolver for AppResourceResolver {
    fn resolve(
        &self,
        name: &str,
        args: &[(String, String)],
    ) -> DomainResult<Arc<dyn SlugResource>> {
        match name {
            REPOSITORY_RESOURCE => self.repository_resource(args),
            other => Err(DomainError::Configuration(format!(
                "unknown slug resource '{other}' (known: {REPOSITORY_RESOURCE})"
            ))),
        }
    }
}
