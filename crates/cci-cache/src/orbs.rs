use cci_core::{OrbInfo, OrbParsedAttributes};

use crate::error::{CacheError, Result};
use crate::store::Store;

/// Resolved orbs keyed by orb identifier.
///
/// Lock order: this store's lock is taken before any other store's lock.
pub type OrbStore = Store<String, OrbInfo>;

impl OrbStore {
    /// Replaces the parsed attributes of an existing orb in place.
    ///
    /// Attributes can only be attached to an orb that has already been stored;
    /// an unknown `id` is reported as [`CacheError::MissingEntry`] and nothing is
    /// inserted.
    pub fn update_parsed_attributes(
        &self,
        id: &str,
        attributes: OrbParsedAttributes,
    ) -> Result<OrbParsedAttributes> {
        self.update(id, |orb| {
            orb.parsed_attributes = Some(attributes.clone());
            attributes
        })
        .ok_or_else(|| {
            tracing::debug!(
                target: "cci.cache",
                orb = id,
                "parsed attributes for an orb that is not cached"
            );
            CacheError::missing(self.name(), id)
        })
    }
}
