// src/application/validation/mod.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::domain::slug::{Locale, SlugDirectory, SlugText};

/// Default error message; the host validator substitutes `:attribute`.
pub const NOT_UNIQUE_MESSAGE: &str = "The :attribute is not unique.";

/// When the uniqueness check is bypassed entirely. `ValueEquals` covers
/// the edit case: the submitted slug is unchanged, so colliding with its
/// own row must not fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SkipPolicy {
    #[default]
    Never,
    Always,
    ValueEquals(String),
}

impl SkipPolicy {
    pub fn applies(&self, value: &str) -> bool {
        match self {
            SkipPolicy::Never => false,
            SkipPolicy::Always => true,
            SkipPolicy::ValueEquals(unchanged) => value == unchanged,
        }
    }
}

/// Validation rule rejecting a submitted slug that already exists for a
/// locale. The locale is either fixed at construction or derived from the
/// validated field's dotted key path ("slug.de" validates against "de").
pub struct UniqueSlugRule {
    directory: Arc<SlugDirectory>,
    locale: Option<Locale>,
    skip: SkipPolicy,
    message: String,
}

impl UniqueSlugRule {
    pub fn new(directory: Arc<SlugDirectory>) -> Self {
        Self {
            directory,
            locale: None,
            skip: SkipPolicy::Never,
            message: NOT_UNIQUE_MESSAGE.to_string(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_skip(mut self, skip: SkipPolicy) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// True when the value may be used as a slug. The skip policy is
    /// evaluated before anything else; when it applies the rule passes
    /// without querying the directory. Directory failures propagate,
    /// they never count as "passes".
    pub async fn passes(&self, value: &str, field_key: Option<&str>) -> ApplicationResult<bool> {
        if self.skip.applies(value) {
            return Ok(true);
        }

        // Empty slugs are unrepresentable in storage, nothing to collide with.
        if value.trim().is_empty() {
            return Ok(true);
        }

        let locale = match &self.locale {
            Some(locale) => locale.clone(),
            None => Locale::new(Self::resolve_locale(field_key))?,
        };
        let text = SlugText::new(value)?;

        Ok(!self.directory.exists(&text, &locale).await?)
    }

    /// The untemplated error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message with `:attribute` substituted, for hosts without their
    /// own templating.
    pub fn render_message(&self, attribute: &str) -> String {
        self.message.replace(":attribute", attribute)
    }

    /// Locale from a dotted field key: the substring after the last `.`.
    /// Keys without a dot (and absent keys) are locale-independent.
    fn resolve_locale(key: Option<&str>) -> &str {
        let Some(key) = key else {
            return "";
        };
        match key.rfind('.') {
            Some(idx) => &key[idx + 1..],
            None => "",
        }
    }
}
