//! Catalog domain: filters, pricing and the item shapes served by the backend.

pub mod catalog;
pub mod filter;
pub mod pricing;
pub mod types;
