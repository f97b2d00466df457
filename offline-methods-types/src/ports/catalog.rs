//! Payment methods catalog port.
//!
//! Implementations can be provider clients, snapshots, mocks, etc.

use crate::domain::{RawPaymentMethod, StoreId};
use crate::error::CatalogError;

/// Port trait for the provider's payment methods catalog.
#[async_trait::async_trait]
pub trait PaymentMethodCatalog: Send + Sync + 'static {
    /// Lists every payment method the provider offers to the store.
    ///
    /// Envelope-based clients fold `{success, response}` with
    /// [`CatalogResponse::into_result`](crate::domain::CatalogResponse::into_result).
    async fn payment_methods(&self, store: StoreId)
    -> Result<Vec<RawPaymentMethod>, CatalogError>;
}
