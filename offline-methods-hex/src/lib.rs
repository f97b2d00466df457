//! # Offline Methods Hex
//!
//! Application service layer and HTTP adapter for the offline payment methods
//! checkout configuration.
//!
//! ## Architecture
//!
//! - `service/` - Application service (gates, fetches, runs the filter pipeline)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the adapter
//!
//! The service is generic over its settings, catalog and asset ports,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::OfflineMethodsService;
