//! Static asset resolver.

use offline_methods_types::AssetResolver;

/// Serves `Vendor_Module::path/to/file` assets from `{base_url}/Vendor_Module/path/to/file`.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetResolver {
    base_url: Option<String>,
}

impl StaticAssetResolver {
    /// Creates a resolver. Without a base URL no asset resolves.
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        }
    }
}

impl AssetResolver for StaticAssetResolver {
    fn url(&self, path: &str) -> Option<String> {
        let base = self.base_url.as_deref()?;

        let relative = match path.split_once("::") {
            Some((module, file)) if !module.is_empty() && !file.is_empty() => {
                format!("{}/{}", module, file.trim_start_matches('/'))
            }
            Some(_) => return None,
            None => path.trim_start_matches('/').to_string(),
        };

        if relative.is_empty() {
            return None;
        }

        Some(format!("{}/{}", base, relative))
    }
}
