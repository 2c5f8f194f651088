mod exists;
mod resolve;
mod service;

pub use exists::SlugExistsQuery;
pub use resolve::ResolveSlugQuery;
pub use service::SlugQueryService;
