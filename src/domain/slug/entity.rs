// src/domain/slug/entity.rs
use crate::domain::slug::value_objects::{Locale, ResourceId, ResourceKey, SlugText};

/// An immutable slug value: a URL-safe text scoped to a locale, pointing
/// at the resource that currently owns it. Storage identity is the
/// `(text, locale)` pair; the resource fields are the mutable payload a
/// re-save may rewire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug {
    pub text: SlugText,
    pub locale: Locale,
    pub resource_key: Option<ResourceKey>,
    pub resource_id: Option<ResourceId>,
}

impl Slug {
    pub fn new(text: SlugText, locale: Locale) -> Self {
        Self {
            text,
            locale,
            resource_key: None,
            resource_id: None,
        }
    }

    pub fn with_resource_key(mut self, key: ResourceKey) -> Self {
        self.resource_key = Some(key);
        self
    }

    pub fn with_resource_id(mut self, id: ResourceId) -> Self {
        self.resource_id = Some(id);
        self
    }

    /// True when this slug matches regardless of the requested locale.
    pub fn is_locale_independent(&self) -> bool {
        self.locale.is_independent()
    }

    /// True when `other` would occupy the same storage row.
    pub fn same_identity(&self, other: &Slug) -> bool {
        self.text == other.text && self.locale == other.locale
    }
}
