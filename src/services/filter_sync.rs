//! Keeps a catalog [`FilterState`] in sync with the address bar and gates
//! catalog fetches.
//!
//! Every transition goes through [`FilterSyncController::apply`], which in one
//! `&mut self` call updates the filter, rewrites the address bar when the
//! canonical URL changed and asks the fingerprint gate whether a fetch is
//! needed. Fetch results are tagged with the fingerprint they were issued for
//! and are dropped when the filter has moved on in the meantime.

use std::fmt::Display;

use log::debug;

use crate::domain::catalog::CatalogResult;
use crate::domain::filter::{CatalogQuery, Fingerprint, FilterState, SortKey, should_refetch};
use crate::domain::types::{PageNumber, SearchText};

/// The single address-bar slot. Writes replace the current entry, they never
/// push a new history entry.
pub trait AddressBar {
    /// Current location as `path` or `path?query`.
    fn read(&self) -> String;

    fn replace(&mut self, url: &str);
}

/// In-memory address bar used server-side and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryAddressBar {
    url: String,
    replacements: usize,
}

impl MemoryAddressBar {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            replacements: 0,
        }
    }

    /// Number of `replace` calls so far.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl AddressBar for MemoryAddressBar {
    fn read(&self) -> String {
        self.url.clone()
    }

    fn replace(&mut self, url: &str) {
        self.url = url.to_string();
        self.replacements += 1;
    }
}

/// A fetch handed to the catalog collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    query: CatalogQuery,
    fingerprint: Fingerprint,
}

impl FetchTicket {
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }
}

/// What the caller has to do after a transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncEffects {
    /// Fetch to start, if the effective query changed.
    pub refetch: Option<FetchTicket>,
    /// The page number changed; scroll the listing back to the top.
    pub scroll_to_top: bool,
    /// The address bar was rewritten.
    pub url_replaced: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded { items: Vec<T>, total_items: usize },
    Failed { message: String },
}

pub struct FilterSyncController<A, T> {
    address_bar: A,
    path: String,
    filter: FilterState,
    dispatched: Option<Fingerprint>,
    fetch_state: FetchState<T>,
}

impl<A: AddressBar, T> FilterSyncController<A, T> {
    /// Reads the filter from the address bar and rewrites it to its canonical
    /// form when needed. No fetch is started until [`Self::sync`] is called.
    pub fn new(mut address_bar: A, page_size: usize) -> Self {
        let current = address_bar.read();
        let (path, query) = match current.split_once('?') {
            Some((path, query)) => (path.to_string(), query),
            None => (current.clone(), ""),
        };
        let filter = FilterState::from_query_with_page_size(query, page_size);

        let canonical = filter.to_url(&path);
        if canonical != current {
            debug!("Replacing {current} with canonical {canonical}");
            address_bar.replace(&canonical);
        }

        Self {
            address_bar,
            path,
            filter,
            dispatched: None,
            fetch_state: FetchState::Idle,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn fetch_state(&self) -> &FetchState<T> {
        &self.fetch_state
    }

    pub fn address_bar(&self) -> &A {
        &self.address_bar
    }

    /// Canonical URL of the current filter.
    pub fn canonical_url(&self) -> String {
        self.filter.to_url(&self.path)
    }

    /// Runs the fetch gate against the current filter.
    pub fn sync(&mut self) -> Option<FetchTicket> {
        if !should_refetch(self.dispatched.as_ref(), &self.filter) {
            return None;
        }

        let query = self.filter.catalog_query();
        let fingerprint = query.fingerprint();
        self.dispatched = Some(fingerprint.clone());
        self.fetch_state = FetchState::Loading;
        Some(FetchTicket { query, fingerprint })
    }

    pub fn on_search_change(&mut self, text: impl Into<SearchText>) -> SyncEffects {
        let next = self.filter.clone().with_search(text);
        self.apply(next)
    }

    pub fn on_sort_change(&mut self, key: SortKey) -> SyncEffects {
        let next = self.filter.clone().with_sort(key);
        self.apply(next)
    }

    pub fn on_page_change(&mut self, page: PageNumber) -> SyncEffects {
        let next = self.filter.clone().with_page(page);
        self.apply(next)
    }

    /// Starts the current query again after a failure. Returns `None` unless
    /// the last fetch failed.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !matches!(self.fetch_state, FetchState::Failed { .. }) {
            return None;
        }
        self.dispatched = None;
        self.sync()
    }

    /// Applies a fetch outcome. Returns `false` when the ticket belongs to a
    /// filter that is no longer current; the outcome is then discarded.
    pub fn complete_fetch<E: Display>(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<CatalogResult<T>, E>,
    ) -> bool {
        if self.dispatched.as_ref() != Some(&ticket.fingerprint) {
            debug!("Discarding superseded catalog result for {}", ticket.fingerprint);
            return false;
        }

        self.fetch_state = match outcome {
            Ok(CatalogResult::Success { items, total_items }) => {
                FetchState::Loaded { items, total_items }
            }
            Ok(CatalogResult::Failure { errors }) => FetchState::Failed {
                message: errors.join("; "),
            },
            Err(err) => FetchState::Failed {
                message: err.to_string(),
            },
        };
        true
    }

    /// Takes the loaded outcome out of the controller, leaving it idle.
    pub fn take_fetch_state(&mut self) -> FetchState<T> {
        std::mem::replace(&mut self.fetch_state, FetchState::Idle)
    }

    fn apply(&mut self, next: FilterState) -> SyncEffects {
        let scroll_to_top = next.page_number() != self.filter.page_number();
        self.filter = next;

        let canonical = self.canonical_url();
        let url_replaced = canonical != self.address_bar.read();
        if url_replaced {
            self.address_bar.replace(&canonical);
        }

        SyncEffects {
            refetch: self.sync(),
            scroll_to_top,
            url_replaced,
        }
    }
}
