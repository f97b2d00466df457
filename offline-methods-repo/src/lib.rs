//! # Offline Methods Repository
//!
//! Concrete adapters for the offline payment methods service.
//! This crate provides the implementations of the settings, catalog and
//! asset ports the application service is generic over.

pub mod assets;
pub mod catalog;
pub mod settings;

pub use assets::StaticAssetResolver;
pub use catalog::SnapshotCatalog;
pub use settings::{ScopeSettings, ScopedSettings};

/// Adapters loaded from disk, ready to hand to the service.
pub struct Adapters {
    pub settings: ScopedSettings,
    pub catalog: SnapshotCatalog,
    pub assets: StaticAssetResolver,
}

/// Build every adapter from its source.
///
/// # Examples
///
/// ```ignore
/// let adapters = build_adapters("settings.toml", "catalog.json", Some(base_url)).await?;
/// ```
pub async fn build_adapters(
    settings_path: &str,
    catalog_path: &str,
    asset_base_url: Option<String>,
) -> anyhow::Result<Adapters> {
    let settings = ScopedSettings::from_file(settings_path).await?;
    let catalog = SnapshotCatalog::from_file(catalog_path).await?;
    let assets = StaticAssetResolver::new(asset_base_url);

    Ok(Adapters {
        settings,
        catalog,
        assets,
    })
}
