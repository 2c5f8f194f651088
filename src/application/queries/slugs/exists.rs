// src/application/queries/slugs/exists.rs
use super::SlugQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::slug::{Locale, SlugText},
};

/// Asks every resource, in priority order, whether the slug is taken for
/// the locale. Short-circuits on the first yes.
pub struct SlugExistsQuery {
    pub slug: String,
    pub locale: String,
}

impl SlugQueryService {
    pub async fn slug_exists(&self, query: SlugExistsQuery) -> ApplicationResult<bool> {
        let text = SlugText::new(query.slug)?;
        let locale = Locale::new(query.locale)?;

        Ok(self.directory.exists(&text, &locale).await?)
    }
}
