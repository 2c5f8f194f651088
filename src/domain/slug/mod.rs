pub mod directory;
pub mod entity;
pub mod registry;
pub mod repository;
pub mod resource;
pub mod services;
pub mod store;
pub mod value_objects;

pub use directory::SlugDirectory;
pub use entity::Slug;
pub use registry::{ResourceDefinition, ResourceRegistry, ResourceResolver};
pub use repository::SlugRepository;
pub use resource::{
    ArrayResource, ColumnExtractor, ConstantExtractor, LocaleResolution, LocaleScopedPredicate,
    PredicateBuilder, RepositoryResource, ResourceExtractor, SlugOnlyPredicate, SlugResource,
    DEFAULT_PRIORITY,
};
pub use services::UniqueSlugifier;
pub use store::{FieldValue, QueryPredicate, Record, RecordStore};
pub use value_objects::{Locale, ResourceId, ResourceKey, SlugText};
