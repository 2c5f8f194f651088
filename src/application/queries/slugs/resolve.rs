// src/application/queries/slugs/resolve.rs
use super::SlugQueryService;
use crate::{
    application::{
        dto::SlugDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::{Locale, SlugText},
};

/// Resolves a slug through the directory, consulting resources in
/// priority order. An empty locale resolves locale-independently.
pub struct ResolveSlugQuery {
    pub slug: String,
    pub locale: String,
}

impl SlugQueryService {
    pub async fn resolve_slug(&self, query: ResolveSlugQuery) -> ApplicationResult<SlugDto> {
        let text = SlugText::new(query.slug)?;
        let locale = Locale::new(query.locale)?;

        let slug = self
            .directory
            .find_slug(&text, &locale)
            .await?
            .ok_or_else(|| ApplicationError::not_found("slug not found"))?;

        Ok(slug.into())
    }
}
