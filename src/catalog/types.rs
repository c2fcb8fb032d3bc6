//! Catalog wire types and normalization into store-safe records.

use serde::Deserialize;

use crate::services::favorites::FavoriteItem;

/// Nested image variants on a provider record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogImage {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

/// A show record as returned by the catalog provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<CatalogImage>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// May carry provider HTML; stripped before entering the store.
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub official_site: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One element of a provider response list.
///
/// Search endpoints wrap each hit as `{score, show}` while listing
/// endpoints return the record directly. The union normalizes both shapes
/// once, at the boundary, so consumers never probe response shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogRecord {
    Wrapped { show: CatalogItem },
    Direct(CatalogItem),
}

impl CatalogRecord {
    /// Unwrap to the underlying item regardless of response shape.
    #[must_use]
    pub fn into_item(self) -> CatalogItem {
        match self {
            Self::Wrapped { show } => show,
            Self::Direct(item) => item,
        }
    }
}

impl From<&CatalogItem> for FavoriteItem {
    /// Capture a catalog record as a store-safe favorite.
    ///
    /// Markup is stripped here so `title` and `description` are plain text
    /// by the time they reach the store. Image and external-ref fallback
    /// chains skip empty strings the same way the provider's own clients
    /// treat them.
    fn from(item: &CatalogItem) -> Self {
        let image_ref = item
            .image
            .as_ref()
            .map(|img| first_non_empty(&[img.medium.as_deref(), img.original.as_deref()]))
            .unwrap_or_default();
        let external_ref = first_non_empty(&[item.official_site.as_deref(), item.url.as_deref()]);

        Self {
            item_id: item.id.to_string(),
            title: strip_markup(&item.name),
            image_ref,
            tags: item.genres.clone(),
            description: item.summary.as_deref().map(strip_markup).unwrap_or_default(),
            external_ref,
        }
    }
}

fn first_non_empty(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .copied()
        .flatten()
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_owned()
}

/// Remove markup tags, leaving plain text safe for display interpolation.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
