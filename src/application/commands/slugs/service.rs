// src/application/commands/slugs/service.rs
use std::sync::Arc;

use crate::domain::slug::services::UniqueSlugifier;
use crate::domain::slug::SlugRepository;

pub struct SlugCommandService {
    pub(super) repository: Arc<dyn SlugRepository>,
    pub(super) slugifier: Arc<UniqueSlugifier>,
}

impl SlugCommandService {
    pub fn new(repository: Arc<dyn SlugRepository>, slugifier: Arc<UniqueSlugifier>) -> Self {
        Self {
            repository,
            slugifier,
        }
    }
}
