//! Offline Methods Application Service
//!
//! Orchestrates the settings, catalog and asset ports around the filter
//! pipeline. Contains NO infrastructure logic - pure orchestration.

use offline_methods_types::domain::policy::METHOD_CODE;
use offline_methods_types::{
    AssetResolver, CheckoutConfig, CheckoutOption, ExclusionList, FilterPolicy, FinalConfig, Logo,
    MethodsOffSettings, PaymentMethodCatalog, PaymentMethodFilterPipeline, StoreId,
};

/// Application service building the offline methods checkout configuration.
///
/// Generic over its three ports - the adapters are injected at compile time.
/// No operation returns an error: upstream failures degrade to fewer options,
/// an inactive family degrades to the empty payload.
pub struct OfflineMethodsService<S, C, A>
where
    S: MethodsOffSettings,
    C: PaymentMethodCatalog,
    A: AssetResolver,
{
    settings: S,
    catalog: C,
    assets: A,
    pipeline: PaymentMethodFilterPipeline,
}

impl<S, C, A> OfflineMethodsService<S, C, A>
where
    S: MethodsOffSettings,
    C: PaymentMethodCatalog,
    A: AssetResolver,
{
    /// Creates a service with the default filter policy.
    pub fn new(settings: S, catalog: C, assets: A) -> Self {
        Self::with_policy(settings, catalog, assets, FilterPolicy::default())
    }

    /// Creates a service with a custom filter policy.
    pub fn with_policy(settings: S, catalog: C, assets: A, policy: FilterPolicy) -> Self {
        Self {
            settings,
            catalog,
            assets,
            pipeline: PaymentMethodFilterPipeline::new(policy),
        }
    }

    /// Returns a reference to the catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Builds the checkout payload for a store.
    ///
    /// The catalog is not queried when the family is inactive.
    #[tracing::instrument(skip(self), fields(store = %store))]
    pub async fn checkout_config(&self, store: StoreId) -> CheckoutConfig {
        if !self.settings.is_active(store).await {
            tracing::debug!("Offline payment methods inactive");
            return CheckoutConfig::empty();
        }

        let config = FinalConfig {
            is_active: true,
            title: self.settings.title(store).await,
            name_capture: self.settings.has_use_name_capture(store).await,
            document_identification_capture: self
                .settings
                .has_use_document_identification_capture(store)
                .await,
            expiration: self.settings.expiration_format(store).await,
            logo: self.logo(),
            payment_methods_off_active: self.payment_methods_off_active(store).await,
            fingerprint: self.settings.fingerprint_link(store).await,
        };

        CheckoutConfig::active(METHOD_CODE, config)
    }

    /// Resolves the family logo. `None` when the asset has no URL.
    pub fn logo(&self) -> Option<Logo> {
        let policy = self.pipeline.policy();
        self.assets.url(&policy.logo_path).map(|url| Logo {
            url,
            title: policy.logo_title.clone(),
        })
    }

    /// Sorted options left after the admin exclusions, ignoring the active flag.
    #[tracing::instrument(skip(self), fields(store = %store))]
    pub async fn payment_methods_off_active(&self, store: StoreId) -> Vec<CheckoutOption> {
        let setting = self.settings.payment_methods_off_active(store).await;
        let exclusions = ExclusionList::parse(setting.as_deref());

        let methods = match self.catalog.payment_methods(store).await {
            Ok(methods) => methods,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Payment methods catalog unavailable, offering no options"
                );
                Vec::new()
            }
        };

        let options = self.pipeline.run(methods, &exclusions);
        tracing::debug!(
            options = options.len(),
            excluded = exclusions.len(),
            "Offline payment options resolved"
        );
        options
    }

    /// Options offered to shoppers: empty when the family is inactive.
    pub async fn offered_options(&self, store: StoreId) -> Vec<CheckoutOption> {
        if !self.settings.is_active(store).await {
            return Vec::new();
        }
        self.payment_methods_off_active(store).await
    }
}
