// src/application/commands/slugs/delete.rs
use super::SlugCommandService;
use crate::{
    application::{dto::SlugDto, error::ApplicationResult},
    domain::slug::{Locale, Slug, SlugText},
};

/// Removes the row matching `(slug, locale)` exactly. Deleting a slug
/// that was never stored is a no-op success.
pub struct DeleteSlugCommand {
    pub slug: String,
    pub locale: String,
}

impl SlugCommandService {
    pub async fn delete_slug(&self, command: DeleteSlugCommand) -> ApplicationResult<SlugDto> {
        let text = SlugText::new(command.slug)?;
        let locale = Locale::new(command.locale)?;

        let deleted = self.repository.delete(Slug::new(text, locale)).await?;
        Ok(deleted.into())
    }
}
