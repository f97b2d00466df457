//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod assets;
mod catalog;
mod settings;

pub use assets::AssetResolver;
pub use catalog::PaymentMethodCatalog;
pub use settings::MethodsOffSettings;
