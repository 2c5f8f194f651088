// src/application/commands/slugs/save.rs
use super::SlugCommandService;
use crate::{
    application::{dto::SlugDto, error::ApplicationResult},
    domain::slug::{Locale, ResourceId, ResourceKey, Slug, SlugText},
};

/// Upserts a slug row: inserts `(slug, locale)` or rewires the resource
/// fields of the row already holding that identity.
pub struct SaveSlugCommand {
    pub slug: String,
    pub locale: String,
    pub resource_key: Option<String>,
    pub resource_id: Option<String>,
}

impl SlugCommandService {
    pub async fn save_slug(&self, command: SaveSlugCommand) -> ApplicationResult<SlugDto> {
        let text = SlugText::new(command.slug)?;
        let locale = Locale::new(command.locale)?;

        let mut slug = Slug::new(text, locale);
        if let Some(key) = command.resource_key {
            slug = slug.with_resource_key(ResourceKey::new(key)?);
        }
        if let Some(id) = command.resource_id {
            slug = slug.with_resource_id(ResourceId::new(id)?);
        }

        let saved = self.repository.save(slug).await?;
        Ok(saved.into())
    }
}
