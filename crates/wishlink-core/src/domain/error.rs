//! Domain Layer - Store Errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for document store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by the document store or identity provider
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StoreError {
    /// Backend could not be reached
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
    /// Backend refused the request (access rules, missing index, quota...)
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Not found: {0}")]
    NotFound(String),
    /// A document or payload could not be converted
    #[error("Malformed document: {0}")]
    Decode(String),
}
