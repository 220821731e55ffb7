use cci_core::CachedDockerImage;

use crate::store::Store;

/// Registry lookups keyed by image name (`cimg/node:20.1`).
pub type ImageExistenceStore = Store<String, CachedDockerImage>;

impl ImageExistenceStore {
    /// Records the outcome of an existence check. The entry is always marked as checked.
    pub fn check_and_store(&self, name: impl Into<String>, exists: bool) -> CachedDockerImage {
        self.set(name.into(), CachedDockerImage::checked(exists))
    }
}
