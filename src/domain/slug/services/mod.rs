// src/domain/slug/services/mod.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::slug::directory::SlugDirectory;
use crate::domain::slug::value_objects::{Locale, SlugText};

/// Domain service producing slugs that are unique for a locale across
/// every resource the directory knows about.
pub struct UniqueSlugifier {
    directory: Arc<SlugDirectory>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl UniqueSlugifier {
    pub fn new(
        directory: Arc<SlugDirectory>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory,
            generator,
            clock,
        }
    }

    /// Transliterates `input` and suffixes `-1`, `-2`, … until the
    /// candidate is free for `locale`. Inputs that transliterate to
    /// nothing fall back to a timestamp-derived base.
    pub async fn slugify(&self, input: &str, locale: &Locale) -> DomainResult<SlugText> {
        let base = self.generator.slugify(input);
        let base = if base.is_empty() {
            format!("slug-{}", self.clock.now().timestamp())
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            let text = SlugText::new(candidate)?;
            if !self.directory.exists(&text, locale).await? {
                return Ok(text);
            }
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }
}
