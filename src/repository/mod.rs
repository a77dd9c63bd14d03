use async_trait::async_trait;

use crate::domain::catalog::{AnimeSeries, CatalogResult, Product};
use crate::domain::filter::CatalogQuery;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "server")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[cfg(feature = "server")]
pub use http::HttpCatalogRepository;

/// Read access to the remote catalog.
///
/// `Err` means the backend could not be asked or its answer could not be read;
/// a backend that answered but refused the query yields
/// [`CatalogResult::Failure`].
#[async_trait]
pub trait CatalogReader: Send + Sync {
    async fn list_anime(&self, query: &CatalogQuery)
    -> RepositoryResult<CatalogResult<AnimeSeries>>;

    async fn list_products(&self, query: &CatalogQuery)
    -> RepositoryResult<CatalogResult<Product>>;
}
