//! Error types for the offline payment methods service.

/// Domain-level errors (records that cannot be resolved).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Catalog port errors.
///
/// Never surfaced to shoppers: the service folds every variant into an
/// empty option list.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog call unsuccessful: {0}")]
    Unsuccessful(String),

    #[error("Catalog payload could not be decoded: {0}")]
    Decode(String),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Adapter errors (loading settings, catalog snapshots).
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
