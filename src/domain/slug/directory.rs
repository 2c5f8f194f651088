// src/domain/slug/directory.rs
#[cfg(test)]
use crate::domain::errors::DomainError;
use crate::domain::errors::DomainResult;
use crate::domain::slug::entity::Slug;
use crate::domain::slug::resource::SlugResource;
use crate::domain::slug::value_objects::{Locale, SlugText};
use std::sync::{Arc, RwLock};

/// The aggregate of all registered slug resources, consulted in
/// descending priority order; registration order breaks ties. Queries
/// short-circuit on the first answer and fail fast on the first resource
/// error; no partial results are returned as success.
///
/// Registration is normally finished before the first query, but remains
/// supported afterwards; queries take a snapshot of the resource list and
/// never hold the lock across store round-trips.
#[derive(Default)]
pub struct SlugDirectory {
    resources: RwLock<Vec<Arc<dyn SlugResource>>>,
}

impl SlugDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_resource(&self, resource: Arc<dyn SlugResource>) {
        let mut resources = self
            .resources
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        resources.push(resource);
        // Stable sort keeps registration order within equal priorities.
        resources.sort_by_key(|resource| std::cmp::Reverse(resource.priority()));
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Registered resource keys in consultation order.
    pub fn keys(&self) -> Vec<Option<String>> {
        self.snapshot()
            .iter()
            .map(|resource| resource.key().map(|key| key.as_str().to_string()))
            .collect()
    }

    pub async fn exists(&self, text: &SlugText, locale: &Locale) -> DomainResult<bool> {
        for resource in self.snapshot() {
            if resource.slug_exists(text, locale).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub async fn find_slug(&self, text: &SlugText, locale: &Locale) -> DomainResult<Option<Slug>> {
        for resource in self.snapshot() {
            if let Some(slug) = resource.find_slug(text, locale).await? {
                return Ok(Some(slug));
            }
        }
        Ok(None)
    }

    fn snapshot(&self) -> Vec<Arc<dyn SlugResource>> {
        self.resources
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for SlugDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlugDirectory")
            .field("resources", &self.len())
            .finish()
    }
}

/// A resource that always fails; used to verify fail-fast propagation.
#[cfg(test)]
pub(crate) struct FailingResource {
    priority: i32,
}

#[cfg(test)]
#[async_trait::async_trait]
impl SlugResource for FailingResource {
    async fn slug_exists(&self, _text: &SlugText, _locale: &Locale) -> DomainResult<bool> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn find_slug(&self, _text: &SlugText, _locale: &Locale) -> DomainResult<Option<Slug>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    fn key(&self) -> Option<crate::domain::slug::value_objects::ResourceKey> {
        None
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::resource::ArrayResource;
    use crate::domain::slug::value_objects::ResourceKey;

    fn array_resource(slugs: &[&str], key: &str, priority: i32) -> Arc<dyn SlugResource> {
        let slugs = slugs
            .iter()
            .map(|text| SlugText::new(*text).unwrap())
            .collect();
        Arc::new(
            ArrayResource::new(slugs, Some(ResourceKey::new(key).unwrap()))
                .with_priority(priority),
        )
    }

    #[tokio::test]
    async fn higher_priority_resource_wins() {
        let directory = SlugDirectory::new();
        directory.add_resource(array_resource(&["about"], "low", 10));
        directory.add_resource(array_resource(&["about"], "high", 20));

        let text = SlugText::new("about").unwrap();
        let found = directory
            .find_slug(&text, &Locale::independent())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.resource_key.unwrap().as_str(), "high");
    }

    #[tokio::test]
    async fn equal_priority_keeps_registration_order() {
        let directory = SlugDirectory::new();
        directory.add_resource(array_resource(&["about"], "first", 10));
        directory.add_resource(array_resource(&["about"], "second", 10));

        let text = SlugText::new("about").unwrap();
        let found = directory
            .find_slug(&text, &Locale::independent())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.resource_key.unwrap().as_str(), "first");
        assert_eq!(
            directory.keys(),
            vec![Some("first".to_string()), Some("second".to_string())]
        );
    }

    #[tokio::test]
    async fn exists_short_circuits_across_resources() {
        let directory = SlugDirectory::new();
        directory.add_resource(array_resource(&["red-pen"], "product", 10));
        directory.add_resource(array_resource(&["about-cars"], "blog", 5));

        let text = SlugText::new("about-cars").unwrap();
        assert!(directory.exists(&text, &Locale::independent()).await.unwrap());

        let missing = SlugText::new("green-pen").unwrap();
        assert!(!directory.exists(&missing, &Locale::independent()).await.unwrap());
    }

    #[tokio::test]
    async fn first_error_propagates_without_querying_later_resources() {
        let directory = SlugDirectory::new();
        directory.add_resource(Arc::new(FailingResource { priority: 100 }));
        directory.add_resource(array_resource(&["about"], "blog", 10));

        let text = SlugText::new("about").unwrap();
        let err = directory
            .find_slug(&text, &Locale::independent())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));

        let err = directory
            .exists(&text, &Locale::independent())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
