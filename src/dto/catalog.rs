//! DTOs shaped for the catalog listing templates.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::catalog::{AnimeSeries, CatalogKind, Product};
use crate::domain::filter::{FilterState, SortKey};
use crate::domain::types::{AnimeId, PageNumber, ProductId};
use crate::pagination::Paginated;

/// Formats a money amount with two decimals.
pub fn format_price(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Product card with its prices already resolved.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub slug: Option<String>,
    pub image_url: Option<String>,
    pub anime_title: Option<String>,
    pub base_price: String,
    pub final_price: String,
    pub total_saved: String,
    pub shows_savings: bool,
    pub has_fixed_discount: bool,
    pub has_event_discount: bool,
    pub event_discount_percent: Option<String>,
}

impl From<Product> for ProductCard {
    fn from(product: Product) -> Self {
        let price = product.resolved_price();
        Self {
            id: product.id,
            title: product.title,
            slug: product.slug,
            image_url: product.image_url,
            anime_title: product.anime_title,
            base_price: format_price(product.base_price),
            final_price: format_price(price.final_price),
            total_saved: format_price(price.total_saved),
            shows_savings: price.shows_savings(),
            has_fixed_discount: price.has_fixed_discount,
            has_event_discount: price.has_event_discount,
            event_discount_percent: product
                .event_discount_percent
                .filter(|_| price.has_event_discount)
                .map(|percent| percent.normalize().to_string()),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnimeCard {
    pub id: AnimeId,
    pub title: String,
    pub slug: Option<String>,
    pub image_url: Option<String>,
    pub release_year: Option<i32>,
}

impl From<AnimeSeries> for AnimeCard {
    fn from(series: AnimeSeries) -> Self {
        Self {
            id: series.id,
            title: series.title,
            slug: series.slug,
            image_url: series.image_url,
            release_year: series.release_year,
        }
    }
}

/// Filter values echoed back into the toolbar form.
#[derive(Debug, Serialize)]
pub struct FilterView {
    pub q: String,
    pub sort: &'static str,
    pub page: usize,
}

impl From<&FilterState> for FilterView {
    fn from(filter: &FilterState) -> Self {
        Self {
            q: filter.search_text().to_string(),
            sort: filter.sort_key().token(),
            page: filter.page_number().get(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SortOption {
    pub token: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl SortOption {
    pub fn all(selected: SortKey) -> Vec<Self> {
        SortKey::ALL
            .into_iter()
            .map(|key| Self {
                token: key.token(),
                label: key.label(),
                selected: key == selected,
            })
            .collect()
    }
}

/// Entry of the pagination bar. A gap has neither number nor URL.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub number: Option<usize>,
    pub url: Option<String>,
    pub current: bool,
}

/// Data required to render a catalog listing page.
#[derive(Debug, Serialize)]
pub struct CatalogPageData<T> {
    pub kind: CatalogKind,
    pub filter: FilterView,
    pub sort_options: Vec<SortOption>,
    pub listing: Paginated<T>,
    pub page_links: Vec<PageLink>,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
    /// Message shown instead of the listing when the fetch failed.
    pub error: Option<String>,
    pub canonical_url: String,
}

impl<T> CatalogPageData<T> {
    pub fn new(
        kind: CatalogKind,
        filter: &FilterState,
        listing: Paginated<T>,
        error: Option<String>,
    ) -> Self {
        let path = kind.page_path();
        let url_for = |page: usize| {
            PageNumber::new(page)
                .ok()
                .map(|page| filter.clone().with_page(page).to_url(path))
        };

        let page_links = listing
            .pages
            .iter()
            .map(|number| PageLink {
                number: *number,
                url: number.and_then(url_for),
                current: *number == Some(listing.page),
            })
            .collect();

        let previous_url = listing
            .has_previous()
            .then(|| url_for(listing.page - 1))
            .flatten();
        let next_url = listing
            .has_next()
            .then(|| url_for(listing.page + 1))
            .flatten();

        Self {
            kind,
            filter: FilterView::from(filter),
            sort_options: SortOption::all(filter.sort_key()),
            listing,
            page_links,
            previous_url,
            next_url,
            error,
            canonical_url: filter.to_url(path),
        }
    }
}

/// Result of loading a listing page.
#[derive(Debug)]
pub enum CatalogPage<T> {
    /// The requested URL was not canonical; answer with a redirect.
    Redirect(String),
    Ready(CatalogPageData<T>),
}
