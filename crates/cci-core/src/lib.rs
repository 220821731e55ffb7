//! Core value records for the CircleCI language server.
//!
//! These types are produced by external collaborators (the LSP transport, the
//! orb resolver, the registry checker and the API client) and are stored as-is
//! by `cci-cache`.

mod context;
mod docker;
mod document;
mod env_vars;
mod orb;

pub use context::{Context, EnvVariableScope, Project};
pub use docker::CachedDockerImage;
pub use document::Document;
pub use env_vars::EnvVariables;
pub use orb::{OrbInfo, OrbParsedAttributes, RemoteOrbInfo};

/// Re-exported so callers don't need a direct `lsp-types` dependency to key documents.
pub use lsp_types::Uri;
