//! Shared store constructor for all platforms.
//!
//! Returns the [`store::KeyValueStore`] the session should persist to:
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStore`]
//! - **Desktop / Mobile** (native): filesystem via [`store::FileStore`]
//! - **WASM without `web`**: [`store::MemoryStore`], nothing survives a reload

use store::BoardConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::IdbStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate store, scoped to the configured namespace.
///
/// - **Web**: IndexedDB database `"bigbag"` or `"bigbag-<namespace>"`
/// - **Desktop/Mobile**: `<data_dir>/bigbag/` or `<data_dir>/bigbag/<namespace>/`
#[allow(unused_variables)]
pub fn make_store(config: &BoardConfig) -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::IdbStore::with_namespace(config.namespace())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("bigbag");
        store::FileStore::with_namespace(&base, config.namespace())
    }
}
