// src/presentation/http/matcher.rs
use crate::application::ApplicationResult;
use crate::domain::slug::{Locale, ResourceKey, SlugDirectory, SlugText};

pub const DEFAULT_SLUG_PARAM: &str = "slug";
pub const LOCALE_PARAM: &str = "locale";

/// Written into the id parameter when the matched slug carries no
/// resource id, so downstream handlers always see a value.
pub const EMPTY_ID_SENTINEL: &str = "0";

/// Ordered bag of route parameters, as captured from the URI. Matching
/// rewrites a copy; the original capture set stays untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: Vec<(String, String)>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing an existing entry in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(entry, _)| *entry == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|(entry, _)| entry != name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}

/// Route predicate: a captured slug matches when the directory resolves
/// it to the expected resource key.
///
/// Locale only constrains the lookup when a locale parameter is
/// configured; without one the lookup is locale-independent and any
/// locale handling is left to the resources themselves. When an id
/// parameter is configured, a match rewrites the captures: the slug
/// entry is replaced by the resolved resource id (or
/// [`EMPTY_ID_SENTINEL`]).
pub struct SlugMatches {
    resource_key: ResourceKey,
    slug_param: String,
    locale_param: Option<String>,
    id_param: Option<String>,
}

impl SlugMatches {
    pub fn new(resource_key: ResourceKey) -> Self {
        Self {
            resource_key,
            slug_param: DEFAULT_SLUG_PARAM.to_string(),
            locale_param: None,
            id_param: None,
        }
    }

    pub fn with_slug_param(mut self, name: impl Into<String>) -> Self {
        self.slug_param = name.into();
        self
    }

    pub fn with_locale_param(mut self, name: impl Into<String>) -> Self {
        self.locale_param = Some(name.into());
        self
    }

    pub fn with_id_param(mut self, name: impl Into<String>) -> Self {
        self.id_param = Some(name.into());
        self
    }

    pub fn resource_key(&self) -> &ResourceKey {
        &self.resource_key
    }

    pub fn slug_param(&self) -> &str {
        &self.slug_param
    }

    pub fn id_param(&self) -> Option<&str> {
        self.id_param.as_deref()
    }

    /// Rewritten parameters when the captures resolve to this
    /// candidate's resource, `None` otherwise. Store failures are
    /// errors, never a silent non-match.
    pub async fn matches(
        &self,
        directory: &SlugDirectory,
        params: &RouteParams,
    ) -> ApplicationResult<Option<RouteParams>> {
        let raw = params.get(&self.slug_param).unwrap_or("");
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let text = SlugText::new(raw)?;

        let locale = match &self.locale_param {
            Some(param) => {
                let raw_locale = params
                    .get(param)
                    .or_else(|| params.get(LOCALE_PARAM))
                    .unwrap_or("");
                match Locale::new(raw_locale) {
                    Ok(locale) => locale,
                    // A tag no stored slug can carry cannot match.
                    Err(_) => return Ok(None),
                }
            }
            None => Locale::independent(),
        };

        let Some(found) = directory.find_slug(&text, &locale).await? else {
            return Ok(None);
        };
        if found.resource_key.as_ref() != Some(&self.resource_key) {
            return Ok(None);
        }

        let mut rewritten = params.clone();
        if let Some(id_param) = &self.id_param {
            let id = found
                .resource_id
                .map_or_else(|| EMPTY_ID_SENTINEL.to_string(), String::from);
            rewritten.set(id_param.as_str(), id);
            rewritten.remove(&self.slug_param);
        }
        Ok(Some(rewritten))
    }
}

/// The candidate this table matched, plus the rewritten parameters.
pub struct RouteMatch<'a> {
    pub candidate: &'a SlugMatches,
    pub params: RouteParams,
}

/// Candidates for one URI shape, tried in declared order. Mirrors a
/// router trying same-pattern routes top to bottom: the first candidate
/// that matches wins.
#[derive(Default)]
pub struct SlugRouteTable {
    candidates: Vec<SlugMatches>,
}

impl SlugRouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: SlugMatches) {
        self.candidates.push(candidate);
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub async fn try_match(
        &self,
        directory: &SlugDirectory,
        params: &RouteParams,
    ) -> ApplicationResult<Option<RouteMatch<'_>>> {
        for candidate in &self.candidates {
            if let Some(rewritten) = candidate.matches(directory, params).await? {
                return Ok(Some(RouteMatch {
                    candidate,
                    params: rewritten,
                }));
            }
        }
        Ok(None)
    }
}
