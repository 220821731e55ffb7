use std::path::Path;
use std::sync::Arc;

use cci_core::OrbInfo;

use crate::docker::ImageExistenceStore;
use crate::documents::DocumentStore;
use crate::env::{ContextStore, ProjectStore};
use crate::orbs::OrbStore;

/// Outcome of [`Cache::clear_host_data`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostDataReport {
    /// Cached orb definition files deleted from disk.
    pub removed_files: usize,
    /// Orb entries dropped from the store.
    pub cleared_orbs: usize,
}

struct Stores {
    documents: DocumentStore,
    orbs: OrbStore,
    docker: ImageExistenceStore,
    contexts: ContextStore,
    projects: ProjectStore,
}

/// Process-lifetime state shared by the language server's handlers.
///
/// `Cache` is a cheap handle: clones share the same stores. Create one at
/// startup and pass it to every component that needs it.
///
/// ## Lock ordering
///
/// Each store has its own lock. Code that holds more than one must take the
/// orb store's lock first, then the document store's.
#[derive(Clone)]
pub struct Cache {
    stores: Arc<Stores>,
}

impl Cache {
    pub fn new() -> Self {
        Self {
            stores: Arc::new(Stores {
                documents: DocumentStore::new("documents"),
                orbs: OrbStore::new("orbs"),
                docker: ImageExistenceStore::new("docker images"),
                contexts: ContextStore::new("contexts"),
                projects: ProjectStore::new("projects"),
            }),
        }
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.stores.documents
    }

    pub fn orbs(&self) -> &OrbStore {
        &self.stores.orbs
    }

    pub fn docker_images(&self) -> &ImageExistenceStore {
        &self.stores.docker
    }

    pub fn contexts(&self) -> &ContextStore {
        &self.stores.contexts
    }

    pub fn projects(&self) -> &ProjectStore {
        &self.stores.projects
    }

    /// Deletes the on-disk definition of every cached orb, keeping the entries.
    ///
    /// Deletion is best effort; returns the number of files removed.
    pub fn remove_orb_files(&self) -> usize {
        let orbs = self.stores.orbs.lock();
        let _documents = self.stores.documents.lock();
        remove_files(orbs.values())
    }

    /// Drops everything tied to the current host: cached orb files on disk and
    /// the orb entries themselves.
    ///
    /// Both steps run under one hold of the orb lock (and the document lock, in
    /// that order), so an orb stored concurrently is either cleaned up with its
    /// file or survives untouched. The critical section includes file removal
    /// syscalls.
    pub fn clear_host_data(&self) -> HostDataReport {
        let mut orbs = self.stores.orbs.lock();
        let _documents = self.stores.documents.lock();

        let removed_files = remove_files(orbs.values());
        let cleared_orbs = orbs.len();
        orbs.clear();

        tracing::debug!(
            target: "cci.cache",
            removed_files,
            cleared_orbs,
            "cleared host data"
        );
        HostDataReport {
            removed_files,
            cleared_orbs,
        }
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("documents", &self.stores.documents)
            .field("orbs", &self.stores.orbs)
            .field("docker_images", &self.stores.docker)
            .field("contexts", &self.stores.contexts)
            .field("projects", &self.stores.projects)
            .finish()
    }
}

fn remove_files<'a>(orbs: impl Iterator<Item = &'a OrbInfo>) -> usize {
    orbs.filter_map(OrbInfo::file_path)
        .filter(|path| remove_orb_file(path))
        .count()
}

fn remove_orb_file(path: &Path) -> bool {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => {
            tracing::debug!(
                target: "cci.cache",
                path = %path.display(),
                "cached orb path is a directory; leaving it"
            );
            return false;
        }
        Ok(_) => {}
        Err(_) => return false,
    }

    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::trace!(
                target: "cci.cache",
                path = %path.display(),
                "removed cached orb file"
            );
            true
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
        Err(err) => {
            tracing::debug!(
                target: "cci.cache",
                path = %path.display(),
                error = %err,
                "failed to remove cached orb file"
            );
            false
        }
    }
}
