use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// The URL-safe text of a slug. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlugText(String);

impl SlugText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlugText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SlugText> for String {
    fn from(value: SlugText) -> Self {
        value.0
    }
}

/// A locale tag such as "en" or "de-CH". The empty locale means
/// locale-independent: it matches regardless of the requested locale.
///
/// Queries accept tags of any length; persisted rows are capped at
/// [`Locale::MAX_STORED_LEN`] characters by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Longest locale a slug row may carry, mirroring the storage schema.
    pub const MAX_STORED_LEN: usize = 5;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let value = value.trim().to_string();
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(DomainError::Validation(format!(
                "locale '{value}' may only contain ASCII alphanumerics and '-'"
            )));
        }
        Ok(Self(value))
    }

    /// The locale-independent (empty) locale.
    pub fn independent() -> Self {
        Self(String::new())
    }

    pub fn is_independent(&self) -> bool {
        self.0.is_empty()
    }

    /// The next broader locale: "de-CH" -> "de", "de" -> None, "" -> None.
    pub fn parent(&self) -> Option<Self> {
        let idx = self.0.rfind('-')?;
        Some(Self(self.0[..idx].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fits_storage(&self) -> bool {
        self.0.len() <= Self::MAX_STORED_LEN
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::independent()
    }
}

/// The resource type a slug belongs to, e.g. "blog" or "product".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey(String);

impl ResourceKey {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "resource key cannot be empty".into(),
            ));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(format!(
                "resource key '{value}' cannot contain whitespace"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ResourceKey> for String {
    fn from(value: ResourceKey) -> Self {
        value.0
    }
}

/// The identifier of the entity a slug currently points to. Stored as
/// text; numeric ids convert via `From<i64>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "resource id cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<ResourceId> for String {
    fn from(value: ResourceId) -> Self {
        value.0
    }
}
