// src/application/commands/slugs/mod.rs
mod assign;
mod delete;
mod save;
mod service;

pub use assign::AssignSlugCommand;
pub use delete::DeleteSlugCommand;
pub use save::SaveSlugCommand;
pub use service::SlugCommandService;
