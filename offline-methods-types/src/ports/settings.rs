//! Settings store port.
//!
//! Per-store scalar settings of the offline payment methods family, as an
//! admin configured them. Lookups do not fail: adapters fall back to their
//! defaults.

use crate::domain::StoreId;

#[async_trait::async_trait]
pub trait MethodsOffSettings: Send + Sync + 'static {
    /// Whether the family is offered at all.
    async fn is_active(&self, store: StoreId) -> bool;

    async fn title(&self, store: StoreId) -> String;

    /// Whether the payer name is requested at checkout.
    async fn has_use_name_capture(&self, store: StoreId) -> bool;

    /// Whether the payer document is requested at checkout.
    async fn has_use_document_identification_capture(&self, store: StoreId) -> bool;

    async fn expiration_format(&self, store: StoreId) -> String;

    /// Comma-separated option values hidden from shoppers.
    async fn payment_methods_off_active(&self, store: StoreId) -> Option<String>;

    async fn fingerprint_link(&self, store: StoreId) -> String;
}
