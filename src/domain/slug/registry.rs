// src/domain/slug/registry.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::resource::SlugResource;
use std::sync::{Arc, OnceLock};

pub type ResourceFactory = Box<dyn Fn() -> DomainResult<Arc<dyn SlugResource>> + Send + Sync>;

/// How a slug resource comes into being. `Instance` is ready-made,
/// `Factory` runs a closure on first access, `Deferred` asks the
/// registry's resolver to build a resource known only by name.
pub enum ResourceDefinition {
    Instance(Arc<dyn SlugResource>),
    Factory(ResourceFactory),
    Deferred {
        name: String,
        args: Vec<(String, String)>,
    },
}

impl ResourceDefinition {
    pub fn instance(resource: Arc<dyn SlugResource>) -> Self {
        Self::Instance(resource)
    }

    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn() -> DomainResult<Arc<dyn SlugResource>> + Send + Sync + 'static,
    {
        Self::Factory(Box::new(factory))
    }

    pub fn deferred(name: impl Into<String>) -> Self {
        Self::Deferred {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn deferred_with(name: impl Into<String>, args: Vec<(String, String)>) -> Self {
        Self::Deferred {
            name: name.into(),
            args,
        }
    }
}

impl std::fmt::Debug for ResourceDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instance(_) => f.write_str("ResourceDefinition::Instance"),
            Self::Factory(_) => f.write_str("ResourceDefinition::Factory"),
            Self::Deferred { name, .. } => {
                write!(f, "ResourceDefinition::Deferred({name})")
            }
        }
    }
}

/// Builds resources registered by name. Implementations live where the
/// concrete stores do; the registry only knows the contract.
pub trait ResourceResolver: Send + Sync {
    fn resolve(
        &self,
        name: &str,
        args: &[(String, String)],
    ) -> DomainResult<Arc<dyn SlugResource>>;
}

struct RegistryEntry {
    definition: ResourceDefinition,
    resolved: OnceLock<Arc<dyn SlugResource>>,
}

/// Named collection of resource definitions. Each entry is resolved at
/// most once; the built resource is cached so factories and deferred
/// constructions run a single time. Failed resolutions are not cached,
/// a later access retries.
#[derive(Default)]
pub struct ResourceRegistry {
    resolver: Option<Arc<dyn ResourceResolver>>,
    entries: Vec<RegistryEntry>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn ResourceResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn register(&mut self, definition: ResourceDefinition) {
        self.entries.push(RegistryEntry {
            definition,
            resolved: OnceLock::new(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves every registered definition in registration order.
    pub fn resolve_all(&self) -> DomainResult<Vec<Arc<dyn SlugResource>>> {
        self.entries.iter().map(|entry| self.resolve(entry)).collect()
    }

    /// Resolves every definition and registers the results with the
    /// directory. Idempotent per registry thanks to memoization, but each
    /// call adds to the directory, so call it once per directory.
    pub fn resolve_into(
        &self,
        directory: &crate::domain::slug::directory::SlugDirectory,
    ) -> DomainResult<()> {
        for resource in self.resolve_all()? {
            directory.add_resource(resource);
        }
        Ok(())
    }

    fn resolve(&self, entry: &RegistryEntry) -> DomainResult<Arc<dyn SlugResource>> {
        if let Some(resource) = entry.resolved.get() {
            return Ok(resource.clone());
        }
        let built = match &entry.definition {
            ResourceDefinition::Instance(resource) => resource.clone(),
            ResourceDefinition::Factory(factory) => factory()?,
            ResourceDefinition::Deferred { name, args } => {
                let resolver = self.resolver.as_ref().ok_or_else(|| {
                    DomainError::Configuration(format!(
                        "no resolver available for deferred slug resource '{name}'"
                    ))
                })?;
                resolver.resolve(name, args)?
            }
        };
        // A concurrent resolve may have won the race; keep whichever landed.
        Ok(entry.resolved.get_or_init(|| built).clone())
    }
}

impl std::fmt::Debug for ResourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceRegistry")
            .field("entries", &self.entries.len())
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}
