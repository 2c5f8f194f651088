// src/application/commands/slugs/assign.rs
use super::SlugCommandService;
use crate::{
    application::{dto::SlugDto, error::ApplicationResult},
    domain::slug::{Locale, ResourceId, ResourceKey, Slug},
};

/// The full write path: transliterates a display string into a slug that
/// is unique for the locale across every registered resource, then
/// persists it for the owning resource.
pub struct AssignSlugCommand {
    pub text: String,
    pub locale: String,
    pub resource_key: Option<String>,
    pub resource_id: Option<String>,
}

impl SlugCommandService {
    pub async fn assign_slug(&self, command: AssignSlugCommand) -> ApplicationResult<SlugDto> {
        let locale = Locale::new(command.locale)?;
        let text = self.slugifier.slugify(&command.text, &locale).await?;

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
