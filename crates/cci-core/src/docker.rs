use serde::{Deserialize, Serialize};

/// Result of asking a registry whether an image exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedDockerImage {
    pub checked: bool,
    pub exists: bool,
}

impl CachedDockerImage {
    /// A completed check. There is no unchecked constructor: entries only exist once checked.
    pub fn checked(exists: bool) -> Self {
        Self {
            checked: true,
            exists,
        }
    }
}
