// src/application/ports/util.rs

/// Transliterates display text into URL-safe slug form. Uniqueness is the
/// domain's concern; implementations only normalize text.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
