//! Static asset resolver port.

/// Maps a static asset path (`Vendor_Module::path/to/file`) to a public URL.
pub trait AssetResolver: Send + Sync + 'static {
    /// Returns `None` when the asset cannot be served.
    fn url(&self, path: &str) -> Option<String>;
}
