use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::pricing::{ResolvedPrice, resolve_price};
use crate::domain::types::{AnimeId, ProductId, TypeConstraintError};

/// Listing served by the storefront.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Anime,
    Products,
}

impl CatalogKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            CatalogKind::Anime => "anime",
            CatalogKind::Products => "products",
        }
    }

    /// Path of the HTML listing page.
    pub const fn page_path(self) -> &'static str {
        match self {
            CatalogKind::Anime => "/anime",
            CatalogKind::Products => "/products",
        }
    }
}

impl Display for CatalogKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anime" => Ok(CatalogKind::Anime),
            "products" => Ok(CatalogKind::Products),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown catalog `{other}`"
            ))),
        }
    }
}

/// Anime series as listed by the catalog backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnimeSeries {
    pub id: AnimeId,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Product as listed by the catalog backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Series the product belongs to, when the backend includes it.
    #[serde(default)]
    pub anime_title: Option<String>,
    pub base_price: Decimal,
    #[serde(default)]
    pub fixed_discounted_price: Option<Decimal>,
    #[serde(default)]
    pub event_discount_percent: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn resolved_price(&self) -> ResolvedPrice {
        resolve_price(
            self.base_price,
            self.fixed_discounted_price,
            self.event_discount_percent,
        )
    }
}

/// Result of a catalog query: either a page of items or the backend's errors.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogResult<T> {
    Success { items: Vec<T>, total_items: usize },
    Failure { errors: Vec<String> },
}

impl<T> CatalogResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, CatalogResult::Success { .. })
    }
}

/// Wire shape of a catalog response: `{items, totalItems, isSuccess, errors?}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_items: Option<usize>,
    pub is_success: bool,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl<T> From<CatalogEnvelope<T>> for CatalogResult<T> {
    fn from(envelope: CatalogEnvelope<T>) -> Self {
        if envelope.is_success {
            let total_items = envelope.total_items.unwrap_or(envelope.items.len());
            CatalogResult::Success {
                items: envelope.items,
                total_items,
            }
        } else {
            let errors = envelope
                .errors
                .filter(|errors| !errors.is_empty())
                .unwrap_or_else(|| vec!["The catalog service rejected the request".to_string()]);
            CatalogResult::Failure { errors }
        }
    }
}
