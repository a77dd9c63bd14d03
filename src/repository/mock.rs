//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::catalog::{AnimeSeries, CatalogResult, Product};
use crate::domain::filter::CatalogQuery;
use crate::repository::CatalogReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogReader for Catalog {
        async fn list_anime(
            &self,
            query: &CatalogQuery,
        ) -> RepositoryResult<CatalogResult<AnimeSeries>>;
        async fn list_products(
            &self,
            query: &CatalogQuery,
        ) -> RepositoryResult<CatalogResult<Product>>;
    }
}
