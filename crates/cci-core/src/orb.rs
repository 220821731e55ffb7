use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Metadata about where an orb definition came from and where it was written locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteOrbInfo {
    /// Local file the orb source was materialized to. Empty when nothing was written.
    #[serde(default)]
    pub file_path: PathBuf,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
}

/// Names declared by an orb, filled in once its definition has been parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbParsedAttributes {
    pub commands: BTreeSet<String>,
    pub jobs: BTreeSet<String>,
    pub executors: BTreeSet<String>,
    pub parameters: BTreeSet<String>,
}

/// A resolved orb reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbInfo {
    /// The reference as written in the config, e.g. `circleci/node@5.1.0`.
    pub source: String,
    #[serde(default)]
    pub remote_info: RemoteOrbInfo,
    /// `None` until a parse pass has run, even if the orb declares nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_attributes: Option<OrbParsedAttributes>,
}

impl OrbInfo {
    pub fn new(source: impl Into<String>, remote_info: RemoteOrbInfo) -> Self {
        Self {
            source: source.into(),
            remote_info,
            parsed_attributes: None,
        }
    }

    /// The materialized definition file, if one was recorded.
    pub fn file_path(&self) -> Option<&std::path::Path> {
        let path = self.remote_info.file_path.as_path();
        (!path.as_os_str().is_empty()).then_some(path)
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed_attributes.is_some()
    }
}
