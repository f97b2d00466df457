//! # Offline Methods Types
//!
//! Domain types, the filtering pipeline and port traits for the offline
//! payment methods checkout configuration.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Catalog records, checkout options and the filter pipeline
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Payload handed to the checkout front end
//! - `error/` - Domain, port and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CatalogResponse, CheckoutOption, ExclusionList, FilterPolicy, MethodKind, PaymentMethod,
    PaymentMethodFilterPipeline, PaymentPlace, RawPaymentMethod, RawPaymentPlace, StoreId,
};
pub use dto::*;
pub use error::{AdapterError, AppError, CatalogError, DomainError};
pub use ports::{AssetResolver, MethodsOffSettings, PaymentMethodCatalog};
