#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use storefront::domain::catalog::{AnimeSeries, CatalogResult, Product};
use storefront::domain::filter::{CatalogQuery, DEFAULT_PAGE_SIZE, SortField};
use storefront::domain::types::{AnimeId, ProductId};
use storefront::models::config::ServerConfig;
use storefront::repository::CatalogReader;
use storefront::repository::errors::{RepositoryError, RepositoryResult};

/// In-memory catalog that filters, sorts and pages like the real backend.
pub struct FakeCatalog {
    pub anime: Vec<AnimeSeries>,
    pub products: Vec<Product>,
    pub unreachable: bool,
    pub queries: Mutex<Vec<CatalogQuery>>,
}

impl FakeCatalog {
    pub fn seeded() -> Self {
        let anime = [
            ("Frieren", 2023),
            ("Cowboy Bebop", 1998),
            ("Spy x Family", 2022),
            ("Akira", 1988),
        ]
        .into_iter()
        .enumerate()
        .map(|(idx, (title, year))| AnimeSeries {
            id: AnimeId::new(idx as i64 + 1).unwrap(),
            title: title.to_string(),
            slug: None,
            image_url: None,
            release_year: Some(year),
            created_at: Utc
                .with_ymd_and_hms(2024, 1, idx as u32 + 1, 0, 0, 0)
                .unwrap(),
        })
        .collect();

        let mut products = vec![Product {
            id: ProductId::new(1).unwrap(),
            title: "Rem cosplay wig".to_string(),
            slug: Some("rem-wig".to_string()),
            image_url: None,
            anime_title: Some("Re:Zero".to_string()),
            base_price: Decimal::from(100),
            fixed_discounted_price: Some(Decimal::from(80)),
            event_discount_percent: Some(Decimal::from(10)),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        }];
        products.extend((2..=30).map(|id| Product {
            id: ProductId::new(id).unwrap(),
            title: format!("Keychain #{id:02}"),
            slug: None,
            image_url: None,
            anime_title: None,
            base_price: Decimal::from(15),
            fixed_discounted_price: None,
            event_discount_percent: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }));

        Self {
            anime,
            products,
            unreachable: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::seeded()
        }
    }

    pub fn recorded_queries(&self) -> Vec<CatalogQuery> {
        self.queries.lock().unwrap().clone()
    }

    fn record(&self, query: &CatalogQuery) -> RepositoryResult<()> {
        self.queries.lock().unwrap().push(query.clone());
        if self.unreachable {
            Err(RepositoryError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

fn page_of<T: Clone>(items: Vec<T>, query: &CatalogQuery) -> CatalogResult<T> {
    let total_items = items.len();
    let items = items
        .into_iter()
        .skip((query.page - 1) * query.page_size)
        .take(query.page_size)
        .collect();
    CatalogResult::Success { items, total_items }
}

fn matches(title: &str, query: &CatalogQuery) -> bool {
    query
        .search
        .as_deref()
        .is_none_or(|term| title.to_lowercase().contains(&term.to_lowercase()))
}

#[async_trait]
impl CatalogReader for FakeCatalog {
    async fn list_anime(
        &self,
        query: &CatalogQuery,
    ) -> RepositoryResult<CatalogResult<AnimeSeries>> {
        self.record(query)?;

        let mut items: Vec<AnimeSeries> = self
            .anime
            .iter()
            .filter(|series| matches(&series.title, query))
            .cloned()
            .collect();
        match query.sort_by {
            SortField::CreatedAt => items.sort_by_key(|series| series.created_at),
            SortField::ReleaseYear => items.sort_by_key(|series| series.release_year),
            SortField::Title => items.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        if !query.is_ascending {
            items.reverse();
        }

        Ok(page_of(items, query))
    }

    async fn list_products(
        &self,
        query: &CatalogQuery,
    ) -> RepositoryResult<CatalogResult<Product>> {
        self.record(query)?;

        let mut items: Vec<Product> = self
            .products
            .iter()
            .filter(|product| matches(&product.title, query))
            .cloned()
            .collect();
        match query.sort_by {
            SortField::CreatedAt | SortField::ReleaseYear => {
                items.sort_by_key(|product| product.created_at)
            }
            SortField::Title => items.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        if !query.is_ascending {
            items.reverse();
        }

        Ok(page_of(items, query))
    }
}

pub fn server_config() -> ServerConfig {
    ServerConfig {
        domain: "shop.test".to_string(),
        address: "127.0.0.1".to_string(),
        port: 8080,
        backend_url: "http://127.0.0.1:5000/api".to_string(),
        templates_dir: "templates/**/*".to_string(),
        page_size: DEFAULT_PAGE_SIZE,
        request_timeout_secs: 10,
    }
}
