use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the cache root.
pub const CACHE_DIR_ENV: &str = "CCI_CACHE_DIR";

/// Path segments between the cache root and an orb definition file.
const ORB_CACHE_SEGMENTS: [&str; 3] = ["cci", "orbs", ".circleci"];

/// Configuration for selecting the on-disk cache root.
#[derive(Clone, Debug, Default)]
pub struct CacheConfig {
    /// Replaces the OS cache directory; the `cci/orbs/.circleci` layout is still appended.
    pub cache_root_override: Option<PathBuf>,
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(CACHE_DIR_ENV))
    }

    /// Builds the config from the raw value of [`CACHE_DIR_ENV`]. An empty value counts as unset.
    fn from_env_value(value: Option<OsString>) -> Self {
        Self {
            cache_root_override: value.filter(|value| !value.is_empty()).map(PathBuf::from),
        }
    }
}

/// Returns the cache root honoring `config`, otherwise the per-user OS cache directory.
pub fn cache_root(config: &CacheConfig) -> PathBuf {
    match &config.cache_root_override {
        Some(root) => root.clone(),
        None => default_cache_root(),
    }
}

/// The per-user OS cache directory (`$XDG_CACHE_HOME`, `~/Library/Caches`,
/// `%LOCALAPPDATA%`), falling back to `~/.cache`.
pub fn default_cache_root() -> PathBuf {
    select_cache_root(dirs::cache_dir(), dirs::home_dir())
}

fn select_cache_root(os_cache_dir: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = os_cache_dir {
        return dir;
    }
    tracing::debug!(
        target: "cci.cache",
        "no OS cache directory; falling back to ~/.cache"
    );
    home.unwrap_or_default().join(".cache")
}

/// Where the definition of `orb_name` is cached:
/// `<cache-root>/cci/orbs/.circleci/<orb_name>.yml`.
///
/// Only the cache root lookup touches the environment; the filesystem is not accessed.
pub fn resolve_orb_cache_path(orb_name: &str) -> PathBuf {
    orb_cache_path_under(&default_cache_root(), orb_name)
}

/// Like [`resolve_orb_cache_path`], but honoring [`CacheConfig`].
pub fn resolve_orb_cache_path_with(config: &CacheConfig, orb_name: &str) -> PathBuf {
    orb_cache_path_under(&cache_root(config), orb_name)
}

fn orb_cache_path_under(root: &Path, orb_name: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    path.extend(ORB_CACHE_SEGMENTS);
    path.push(format!("{orb_name}.yml"));
    path
}
