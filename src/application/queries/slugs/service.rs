// src/application/queries/slugs/service.rs
use std::sync::Arc;

use crate::domain::slug::SlugDirectory;

pub struct SlugQueryService {
    pub(super) directory: Arc<SlugDirectory>,
}

impl SlugQueryService {
    pub fn new(directory: Arc<SlugDirectory>) -> Self {
        Self { directory }
    }
}
