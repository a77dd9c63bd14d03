//! Error conversion glue for `data` feature consumers.
//!
//! The domain layer must not depend on service error types, but callers
//! parsing path segments into value objects still want `?` to work.

use crate::domain::types::TypeConstraintError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}
