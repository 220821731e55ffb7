pub type Result<T> = std::result::Result<T, CacheError>;

/// Errors produced by store accessors that mutate an existing entry.
///
/// Plain reads never fail; a missing key is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    #[error("no {store} entry for key {key:?}")]
    MissingEntry { store: &'static str, key: String },
}

impl CacheError {
    pub(crate) fn missing(store: &'static str, key: impl Into<String>) -> Self {
        Self::MissingEntry {
            store,
            key: key.into(),
        }
    }
}
