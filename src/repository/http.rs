//! REST implementation of [`CatalogReader`].

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use serde::de::DeserializeOwned;

use crate::domain::catalog::{AnimeSeries, CatalogEnvelope, CatalogKind, CatalogResult, Product};
use crate::domain::filter::CatalogQuery;
use crate::repository::CatalogReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Talks to the storefront backend over HTTP.
///
/// Listings are requested with `GET {base_url}/{anime|products}` and the
/// [`CatalogQuery`] encoded as query parameters.
#[derive(Clone, Debug)]
pub struct HttpCatalogRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogRepository {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Unexpected(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn endpoint(&self, kind: CatalogKind) -> String {
        format!("{}/{}", self.base_url, kind.as_str())
    }

    async fn fetch<T>(
        &self,
        kind: CatalogKind,
        query: &CatalogQuery,
    ) -> RepositoryResult<CatalogResult<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(kind);
        debug!("Fetching {url} with {}", query.fingerprint());

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<CatalogEnvelope<T>>(&body) {
            Ok(envelope) => Ok(envelope.into()),
            Err(err) if status.is_success() => {
                error!("Failed to decode {kind} catalog response: {err}");
                Err(RepositoryError::from(err))
            }
            Err(_) => Err(RepositoryError::Status(status.as_u16())),
        }
    }
}

#[async_trait]
impl CatalogReader for HttpCatalogRepository {
    async fn list_anime(
        &self,
        query: &CatalogQuery,
    ) -> RepositoryResult<CatalogResult<AnimeSeries>> {
        self.fetch(CatalogKind::Anime, query).await
    }

    async fn list_products(
        &self,
        query: &CatalogQuery,
    ) -> RepositoryResult<CatalogResult<Product>> {
        self.fetch(CatalogKind::Products, query).await
    }
}
