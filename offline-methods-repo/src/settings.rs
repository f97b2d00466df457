//! TOML-backed settings store with store → default scope fallback.
//!
//! ```toml
//! [default]
//! active = true
//! title = "Pay in cash"
//!
//! [stores.2]
//! payment_methods_off_active = "pec,bolbradesco"
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use offline_methods_types::{AdapterError, MethodsOffSettings, StoreId};

const DEFAULT_TITLE: &str = "Offline payment methods";
const DEFAULT_EXPIRATION_FORMAT: &str = "dd/MM/yyyy";

/// Settings of one scope. Unset fields fall back to the default scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeSettings {
    pub active: Option<bool>,
    pub title: Option<String>,
    pub name_capture: Option<bool>,
    pub document_identification_capture: Option<bool>,
    pub expiration_format: Option<String>,
    pub payment_methods_off_active: Option<String>,
    pub fingerprint_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    default: ScopeSettings,
    #[serde(default)]
    stores: HashMap<String, ScopeSettings>,
}

/// In-memory settings store layered by scope.
#[derive(Debug, Clone, Default)]
pub struct ScopedSettings {
    default: ScopeSettings,
    stores: HashMap<StoreId, ScopeSettings>,
}

impl ScopedSettings {
    /// Creates a store with only a default scope.
    pub fn new(default: ScopeSettings) -> Self {
        Self {
            default,
            stores: HashMap::new(),
        }
    }

    /// Adds or replaces a store scope.
    pub fn with_store(mut self, store: StoreId, settings: ScopeSettings) -> Self {
        self.stores.insert(store, settings);
        self
    }

    /// Parses a TOML settings document.
    pub fn from_toml_str(raw: &str) -> Result<Self, AdapterError> {
        let file: SettingsFile =
            toml::from_str(raw).map_err(|e| AdapterError::Parse(e.to_string()))?;

        let stores = file
            .stores
            .into_iter()
            .map(|(key, settings)| {
                key.parse::<StoreId>()
                    .map(|store| (store, settings))
                    .map_err(|_| {
                        AdapterError::Invalid(format!("store scope '{}' is not a store ID", key))
                    })
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self {
            default: file.default,
            stores,
        })
    }

    /// Loads a TOML settings file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, AdapterError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let settings = Self::from_toml_str(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            stores = settings.stores.len(),
            "Loaded payment settings"
        );
        Ok(settings)
    }

    fn field<T>(&self, store: StoreId, pick: impl Fn(&ScopeSettings) -> Option<T>) -> Option<T> {
        self.stores
            .get(&store)
            .and_then(&pick)
            .or_else(|| pick(&self.default))
    }
}

#[async_trait]
impl MethodsOffSettings for ScopedSettings {
    async fn is_active(&self, store: StoreId) -> bool {
        self.field(store, |s| s.active).unwrap_or(false)
    }

    async fn title(&self, store: StoreId) -> String {
        self.field(store, |s| s.title.clone())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    async fn has_use_name_capture(&self, store: StoreId) -> bool {
        self.field(store, |s| s.name_capture).unwrap_or(false)
    }

    async fn has_use_document_identification_capture(&self, store: StoreId) -> bool {
        self.field(store, |s| s.document_identification_capture)
            .unwrap_or(false)
    }

    async fn expiration_format(&self, store: StoreId) -> String {
        self.field(store, |s| s.expiration_format.clone())
            .unwrap_or_else(|| DEFAULT_EXPIRATION_FORMAT.to_string())
    }

    async fn payment_methods_off_active(&self, store: StoreId) -> Option<String> {
        self.field(store, |s| s.payment_methods_off_active.clone())
    }

    async fn fingerprint_link(&self, store: StoreId) -> String {
        self.field(store, |s| s.fingerprint_link.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = r#"
        [default]
        active = true
        title = "Pay in cash"
        name_capture = true
        fingerprint_link = "https://fp.example.com"

        [stores.2]
        title = "Pague em dinheiro"
        payment_methods_off_active = "pec,bolbradesco"

        [stores.3]
        active = false
    "#;

    #[tokio::test]
    async fn test_default_scope() {
        let settings = ScopedSettings::from_toml_str(SETTINGS).unwrap();
        let store = StoreId::new(1);

        assert!(settings.is_active(store).await);
        assert_eq!(settings.title(store).await, "Pay in cash");
        assert!(settings.has_use_name_capture(store).await);
        assert!(!settings.has_use_document_identification_capture(store).await);
        assert_eq!(settings.expiration_format(store).await, "dd/MM/yyyy");
        assert_eq!(settings.payment_methods_off_active(store).await, None);
        assert_eq!(settings.fingerprint_link(store).await, "https://fp.example.com");
    }

    #[tokio::test]
    async fn test_store_scope_overrides_field_by_field() {
        let settings = ScopedSettings::from_toml_str(SETTINGS).unwrap();
        let store = StoreId::new(2);

        assert!(settings.is_active(store).await);
        assert_eq!(settings.title(store).await, "Pague em dinheiro");
        assert!(settings.has_use_name_capture(store).await);
        assert_eq!(
            settings.payment_methods_off_active(store).await.as_deref(),
            Some("pec,bolbradesco")
        );
    }

    #[tokio::test]
    async fn test_store_can_disable_family() {
        let settings = ScopedSettings::from_toml_str(SETTINGS).unwrap();

        assert!(!settings.is_active(StoreId::new(3)).await);
    }

    #[tokio::test]
    async fn test_empty_settings_are_inactive() {
        let settings = ScopedSettings::default();
        let store = StoreId::new(1);

        assert!(!settings.is_active(store).await);
        assert_eq!(settings.title(store).await, DEFAULT_TITLE);
        assert_eq!(settings.fingerprint_link(store).await, "");
    }

    #[test]
    fn test_invalid_store_scope() {
        let result = ScopedSettings::from_toml_str("[stores.main]\nactive = true\n");
        assert!(matches!(result, Err(AdapterError::Invalid(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ScopedSettings::from_toml_str("[default]\nactiv = true\n");
        assert!(matches!(result, Err(AdapterError::Parse(_))));
    }

    #[tokio::test]
    async fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, SETTINGS).unwrap();

        let settings = ScopedSettings::from_file(&path).await.unwrap();

        assert!(settings.is_active(StoreId::new(9)).await);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = ScopedSettings::from_file("/nonexistent/settings.toml").await;
        assert!(matches!(result, Err(AdapterError::Io(_))));
    }

    #[tokio::test]
    async fn test_builder() {
        let settings = ScopedSettings::new(ScopeSettings {
            active: Some(true),
            ..Default::default()
        })
        .with_store(
            StoreId::new(4),
            ScopeSettings {
                payment_methods_off_active: Some("oxxo".into()),
                ..Default::default()
            },
        );

        assert_eq!(
            settings.payment_methods_off_active(StoreId::new(4)).await.as_deref(),
            Some("oxxo")
        );
        assert!(settings.is_active(StoreId::new(4)).await);
    }
}
