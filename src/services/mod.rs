pub mod api;
pub mod catalog;
pub mod errors;
pub mod filter_sync;

pub use errors::{ServiceError, ServiceResult};
