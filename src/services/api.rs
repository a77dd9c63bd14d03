use log::{error, warn};

use crate::domain::catalog::{CatalogKind, CatalogResult};
use crate::domain::filter::FilterState;
use crate::dto::api::ApiCatalogResponse;
use crate::dto::catalog::{AnimeCard, ProductCard};
use crate::pagination::Paginated;
use crate::repository::CatalogReader;
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of anime series for the raw `query` string.
pub async fn list_anime<R>(
    repo: &R,
    query: &str,
    page_size: usize,
) -> ServiceResult<ApiCatalogResponse<AnimeCard>>
where
    R: CatalogReader + ?Sized,
{
    let filter = FilterState::from_query_with_page_size(query, page_size);
    let result = repo
        .list_anime(&filter.catalog_query())
        .await
        .map_err(|err| {
            error!("Failed to list anime: {err}");
            ServiceError::from(err)
        })?;

    respond(CatalogKind::Anime, &filter, result, AnimeCard::from)
}

/// Returns one page of products, prices resolved, for the raw `query` string.
pub async fn list_products<R>(
    repo: &R,
    query: &str,
    page_size: usize,
) -> ServiceResult<ApiCatalogResponse<ProductCard>>
where
    R: CatalogReader + ?Sized,
{
    let filter = FilterState::from_query_with_page_size(query, page_size);
    let result = repo
        .list_products(&filter.catalog_query())
        .await
        .map_err(|err| {
            error!("Failed to list products: {err}");
            ServiceError::from(err)
        })?;

    respond(CatalogKind::Products, &filter, result, ProductCard::from)
}

fn respond<T, U>(
    kind: CatalogKind,
    filter: &FilterState,
    result: CatalogResult<T>,
    to_card: impl FnMut(T) -> U,
) -> ServiceResult<ApiCatalogResponse<U>> {
    match result {
        CatalogResult::Success { items, total_items } => {
            let page = Paginated::new(
                items,
                filter.page_number().get(),
                total_items,
                filter.page_size(),
            )
            .map(to_card);

            Ok(ApiCatalogResponse {
                kind,
                items: page.items,
                page: page.page,
                page_size: filter.page_size(),
                total_items: page.total_items,
                total_pages: page.total_pages,
                query: filter.to_query(),
            })
        }
        CatalogResult::Failure { errors } => {
            warn!("{kind} listing rejected: {}", errors.join("; "));
            Err(ServiceError::Backend(errors))
        }
    }
}
