use crate::domain::slug::Slug;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugDto {
    pub slug: String,
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl From<Slug> for SlugDto {
    fn from(slug: Slug) -> Self {
        Self {
            slug: slug.text.into(),
            locale: slug.locale.into(),
            resource_key: slug.resource_key.map(Into::into),
            resource_id: slug.resource_id.map(Into::into),
        }
    }
}
