use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use slug::slugify;
use std::sync::Arc;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Picks the slug generator named in configuration.
pub fn select_slug_generator(name: &str) -> DomainResult<Arc<dyn SlugGenerator>> {
    match name {
        "default" => Ok(Arc::new(DefaultSlugGenerator)),
        other => Err(DomainError::Configuration(format!(
            "unknown slugifier '{other}' (known: default)"
        ))),
    }
}
