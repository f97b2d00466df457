//! Snapshot-backed payment methods catalog.
//!
//! Serves provider envelopes captured ahead of time, keyed by store with a
//! default fallback:
//!
//! ```json
//! {
//!   "default": { "success": true, "response": [ ... ] },
//!   "stores": { "2": { "success": false, "response": { "message": "..." } } }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use offline_methods_types::{
    AdapterError, CatalogError, CatalogResponse, PaymentMethodCatalog, RawPaymentMethod, StoreId,
};

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    default: Option<CatalogResponse>,
    #[serde(default)]
    stores: HashMap<String, CatalogResponse>,
}

/// Catalog answering from in-memory provider envelopes.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCatalog {
    default: Option<CatalogResponse>,
    stores: HashMap<StoreId, CatalogResponse>,
}

impl SnapshotCatalog {
    /// Creates a catalog serving the same envelope to every store.
    pub fn new(default: CatalogResponse) -> Self {
        Self {
            default: Some(default),
            stores: HashMap::new(),
        }
    }

    /// Adds or replaces the envelope of one store.
    pub fn with_store(mut self, store: StoreId, envelope: CatalogResponse) -> Self {
        self.stores.insert(store, envelope);
        self
    }

    /// Parses a JSON snapshot document.
    pub fn from_json_str(raw: &str) -> Result<Self, AdapterError> {
        let file: SnapshotFile =
            serde_json::from_str(raw).map_err(|e| AdapterError::Parse(e.to_string()))?;

        let stores = file
            .stores
            .into_iter()
            .map(|(key, envelope)| {
                key.parse::<StoreId>()
                    .map(|store| (store, envelope))
                    .map_err(|_| {
                        AdapterError::Invalid(format!("catalog key '{}' is not a store ID", key))
                    })
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self {
            default: file.default,
            stores,
        })
    }

    /// Loads a JSON snapshot file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, AdapterError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            stores = catalog.stores.len(),
            has_default = catalog.default.is_some(),
            "Loaded payment methods snapshot"
        );
        Ok(catalog)
    }

    fn envelope(&self, store: StoreId) -> Option<&CatalogResponse> {
        self.stores.get(&store).or(self.default.as_ref())
    }
}

#[async_trait]
impl PaymentMethodCatalog for SnapshotCatalog {
    async fn payment_methods(
        &self,
        store: StoreId,
    ) -> Result<Vec<RawPaymentMethod>, CatalogError> {
        self.envelope(store)
            .cloned()
            .ok_or_else(|| CatalogError::Unavailable(format!("no snapshot for store {}", store)))?
            .into_result()
    }
}
