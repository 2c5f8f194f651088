// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::slugs::SlugCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::slugs::SlugQueryService,
        validation::{SkipPolicy, UniqueSlugRule},
    },
    domain::slug::{services::UniqueSlugifier, Locale, SlugDirectory, SlugRepository},
};

pub struct ApplicationServices {
    pub slug_commands: Arc<SlugCommandService>,
    pub slug_queries: Arc<SlugQueryService>,
    directory: Arc<SlugDirectory>,
    slugifier: Arc<UniqueSlugifier>,
}

impl ApplicationServices {
    pub fn new(
        repository: Arc<dyn SlugRepository>,
        directory: Arc<SlugDirectory>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let slugifier = Arc::new(UniqueSlugifier::new(
            Arc::clone(&directory),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let slug_commands = Arc::new(SlugCommandService::new(
            Arc::clone(&repository),
            Arc::clone(&slugifier),
        ));

        let slug_queries = Arc::new(SlugQueryService::new(Arc::clone(&directory)));

        Self {
            slug_commands,
            slug_queries,
            directory,
            slugifier,
        }
    }

    pub fn directory(&self) -> Arc<SlugDirectory> {
        Arc::clone(&self.directory)
    }

    pub fn slugifier(&self) -> Arc<UniqueSlugifier> {
        Arc::clone(&self.slugifier)
    }

    /// Builds a uniqueness rule over this service's directory. `locale`
    /// fixes the locale; `None` derives it from the validated field key.
    pub fn unique_slug_rule(&self, locale: Option<Locale>, skip: SkipPolicy) -> UniqueSlugRule {
        let mut rule = UniqueSlugRule::new(Arc::clone(&self.directory)).with_skip(skip);
        if let Some(locale) = locale {
            rule = rule.with_locale(locale);
        }
        rule
    }
}
