//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The binary loads the config once and
//! installs it with [`init_config`]; request handlers read it with [`cfg`].
//!
//! ```text
//! main ── init_config(loaded) ──► CONFIG (ArcSwap) ◄── cfg() ── request loop
//! ```

use super::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage. Holds the default config until [`init_config`].
static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Current config. Wait-free; the `Arc` derefs to `&SiteConfig`.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install the loaded config (called once at startup).
#[inline]
pub fn init_config(config: SiteConfig) {
    CONFIG.store(Arc::new(config));
}
