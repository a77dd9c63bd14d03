//! Catalog filter state and its two projections: the address-bar query string
//! and the effective backend query.
//!
//! The address bar only ever carries `q`, `sort` and `page`, and only when they
//! differ from their defaults. Parsing never fails: malformed values fall back
//! to the default for that parameter.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::{PageNumber, SearchText};

/// Number of catalog cards shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sort order selectable in the catalog toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "all")]
    Default,
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "title-asc")]
    TitleAsc,
    #[serde(rename = "title-desc")]
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    /// Token used in the `sort` query parameter.
    pub const fn token(self) -> &'static str {
        match self {
            SortKey::Default => "all",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.token() == token)
    }

    /// Unknown tokens select the default ordering.
    pub fn parse_lenient(token: &str) -> Self {
        Self::from_token(token.trim()).unwrap_or_default()
    }

    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Featured",
            SortKey::Newest => "Newest release",
            SortKey::Oldest => "Oldest release",
            SortKey::TitleAsc => "Title A-Z",
            SortKey::TitleDesc => "Title Z-A",
        }
    }

    pub const fn sort_field(self) -> SortField {
        match self {
            SortKey::Default => SortField::CreatedAt,
            SortKey::Newest | SortKey::Oldest => SortField::ReleaseYear,
            SortKey::TitleAsc | SortKey::TitleDesc => SortField::Title,
        }
    }

    pub const fn direction(self) -> SortDirection {
        match self {
            SortKey::Oldest | SortKey::TitleAsc => SortDirection::Ascending,
            SortKey::Default | SortKey::Newest | SortKey::TitleDesc => SortDirection::Descending,
        }
    }

    pub const fn is_default(self) -> bool {
        matches!(self, SortKey::Default)
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Backend field a catalog listing is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    CreatedAt,
    ReleaseYear,
    Title,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

/// The effective query sent to the catalog backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub page: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub sort_by: SortField,
    pub is_ascending: bool,
}

impl CatalogQuery {
    /// Canonical form of the query, equal for equal queries.
    pub fn fingerprint(&self) -> Fingerprint {
        let canonical =
            serde_html_form::to_string(self).unwrap_or_else(|_| format!("{self:?}"));
        Fingerprint(canonical)
    }
}

/// Canonical representation of a [`CatalogQuery`] used to detect no-op fetches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Search, sort and page selection of a catalog listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    search_text: SearchText,
    sort_key: SortKey,
    page_number: PageNumber,
    page_size: usize,
}

#[derive(Default, Deserialize)]
struct RawParams {
    #[serde(default)]
    q: Vec<String>,
    #[serde(default)]
    sort: Vec<String>,
    #[serde(default)]
    page: Vec<String>,
}

#[derive(Serialize)]
struct CanonicalParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<usize>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_text: SearchText::default(),
            sort_key: SortKey::Default,
            page_number: PageNumber::FIRST,
            page_size: page_size.max(1),
        }
    }

    /// Parses an address-bar query string with the default page size.
    pub fn from_query(query: &str) -> Self {
        Self::from_query_with_page_size(query, DEFAULT_PAGE_SIZE)
    }

    /// Parses `q`, `sort` and `page`, ignoring every other parameter. When a
    /// parameter repeats, the last occurrence wins.
    pub fn from_query_with_page_size(query: &str, page_size: usize) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let raw: RawParams = serde_html_form::from_str(query).unwrap_or_default();

        let mut state = Self::new(page_size);
        if let Some(q) = raw.q.into_iter().last() {
            state.search_text = SearchText::new(q);
        }
        if let Some(sort) = raw.sort.last() {
            state.sort_key = SortKey::parse_lenient(sort);
        }
        if let Some(page) = raw.page.last() {
            state.page_number = PageNumber::parse_lenient(page);
        }
        state
    }

    /// Replaces the search text. A different text starts over at page 1.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<SearchText>) -> Self {
        let text = text.into();
        if text != self.search_text {
            self.search_text = text;
            self.page_number = PageNumber::FIRST;
        }
        self
    }

    /// Replaces the sort key and always starts over at page 1.
    #[must_use]
    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self.page_number = PageNumber::FIRST;
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: PageNumber) -> Self {
        self.page_number = page;
        self
    }

    /// Serializes the non-default parameters, without a leading `?`.
    pub fn to_query(&self) -> String {
        let params = CanonicalParams {
            q: self.search_text.as_option(),
            sort: (!self.sort_key.is_default()).then(|| self.sort_key.token()),
            page: (!self.page_number.is_first()).then(|| self.page_number.get()),
        };
        serde_html_form::to_string(&params).unwrap_or_default()
    }

    /// Joins `path` with the canonical query string.
    pub fn to_url(&self, path: &str) -> String {
        let query = self.to_query();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }

    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery {
            page: self.page_number.get(),
            page_size: self.page_size,
            search: self.search_text.as_option().map(str::to_string),
            sort_by: self.sort_key.sort_field(),
            is_ascending: self.sort_key.direction().is_ascending(),
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.catalog_query().fingerprint()
    }

    pub fn search_text(&self) -> &SearchText {
        &self.search_text
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page_number(&self) -> PageNumber {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Returns `true` when `next` describes a different backend query than the
/// one `previous` was computed from.
pub fn should_refetch(previous: Option<&Fingerprint>, next: &FilterState) -> bool {
    previous != Some(&next.fingerprint())
}
