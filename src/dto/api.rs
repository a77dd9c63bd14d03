//! DTOs exposed by the JSON catalog endpoints.

use serde::Serialize;

use crate::domain::catalog::CatalogKind;

/// Page of catalog items returned by `/api/v1/catalog/{kind}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCatalogResponse<T> {
    pub kind: CatalogKind,
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Canonical query string of the filter that produced this page.
    pub query: String,
}

/// Body of a failed API call.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub errors: Vec<String>,
}

impl ApiErrorResponse {
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }
}
