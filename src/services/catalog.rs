//! Loaders for the server-rendered catalog listings.
//!
//! Each request runs its own [`FilterSyncController`] over a
//! [`MemoryAddressBar`] seeded with the request URL. A URL the controller had
//! to rewrite is answered with a redirect to the canonical form.

use log::{error, warn};

use crate::domain::catalog::CatalogKind;
use crate::dto::catalog::{AnimeCard, CatalogPage, CatalogPageData, ProductCard};
use crate::pagination::Paginated;
use crate::repository::CatalogReader;
use crate::services::filter_sync::{FetchState, FilterSyncController, MemoryAddressBar};

/// Shown when the catalog backend could not be reached or understood.
pub const CATALOG_UNAVAILABLE: &str = "The catalog is temporarily unavailable. Please try again.";

type Controller<T> = FilterSyncController<MemoryAddressBar, T>;

/// Loads the anime series listing for the request `url` (`path?query`).
pub async fn load_anime_page<R>(repo: &R, url: &str, page_size: usize) -> CatalogPage<AnimeCard>
where
    R: CatalogReader + ?Sized,
{
    let mut controller = match open(url, page_size) {
        Ok(controller) => controller,
        Err(location) => return CatalogPage::Redirect(location),
    };

    if let Some(ticket) = controller.sync() {
        let outcome = repo.list_anime(ticket.query()).await.map_err(|err| {
            error!("Failed to list anime: {err}");
            CATALOG_UNAVAILABLE
        });
        controller.complete_fetch(ticket, outcome);
    }

    CatalogPage::Ready(finish(CatalogKind::Anime, controller, AnimeCard::from))
}

/// Loads the product listing for the request `url` (`path?query`).
pub async fn load_product_page<R>(
    repo: &R,
    url: &str,
    page_size: usize,
) -> CatalogPage<ProductCard>
where
    R: CatalogReader + ?Sized,
{
    let mut controller = match open(url, page_size) {
        Ok(controller) => controller,
        Err(location) => return CatalogPage::Redirect(location),
    };

    if let Some(ticket) = controller.sync() {
        let outcome = repo.list_products(ticket.query()).await.map_err(|err| {
            error!("Failed to list products: {err}");
            CATALOG_UNAVAILABLE
        });
        controller.complete_fetch(ticket, outcome);
    }

    CatalogPage::Ready(finish(CatalogKind::Products, controller, ProductCard::from))
}

/// Returns the canonical location as `Err` when `url` is not canonical.
fn open<T>(url: &str, page_size: usize) -> Result<Controller<T>, String> {
    let controller = FilterSyncController::new(MemoryAddressBar::new(url), page_size);
    if controller.address_bar().replacements() > 0 {
        Err(controller.canonical_url())
    } else {
        Ok(controller)
    }
}

fn finish<T, U>(
    kind: CatalogKind,
    mut controller: Controller<T>,
    to_card: impl FnMut(T) -> U,
) -> CatalogPageData<U> {
    let filter = controller.filter().clone();
    let page = filter.page_number().get();
    let page_size = filter.page_size();

    let (listing, error) = match controller.take_fetch_state() {
        FetchState::Loaded { items, total_items } => (
            Paginated::new(items, page, total_items, page_size).map(to_card),
            None,
        ),
        FetchState::Failed { message } => {
            warn!("{kind} listing failed for {}: {message}", filter.fingerprint());
            (Paginated::new(Vec::new(), page, 0, page_size), Some(message))
        }
        FetchState::Idle | FetchState::Loading => {
            (Paginated::new(Vec::new(), page, 0, page_size), None)
        }
    };

    CatalogPageData::new(kind, &filter, listing, error)
}
