//! In-memory state store for the CircleCI language server.
//!
//! A [`Cache`] owns five independent stores, each a map behind its own lock:
//! - [`DocumentStore`]: open documents keyed by URI
//! - [`OrbStore`]: resolved orbs keyed by orb id, with parsed attributes attached later
//! - [`ImageExistenceStore`]: docker image existence checks keyed by image name
//! - [`ContextStore`] / [`ProjectStore`]: environment variable names per context / project
//!
//! Nothing here is persisted. The only filesystem interaction is
//! [`Cache::clear_host_data`] deleting orb definitions that the resolver wrote
//! under [`resolve_orb_cache_path`].

mod cache;
mod docker;
mod documents;
mod env;
mod error;
mod orbs;
mod paths;
mod store;

pub use cache::{Cache, HostDataReport};
pub use docker::ImageExistenceStore;
pub use documents::DocumentStore;
pub use env::{ContextStore, ProjectStore};
pub use error::{CacheError, Result};
pub use orbs::OrbStore;
pub use paths::{
    cache_root, default_cache_root, resolve_orb_cache_path, resolve_orb_cache_path_with,
    CacheConfig, CACHE_DIR_ENV,
};
pub use store::Store;
