use serde::{Deserialize, Serialize};

use crate::EnvVariables;

/// Records that own a set of environment variable names.
pub trait EnvVariableScope {
    /// The key the record is stored under.
    fn scope_key(&self) -> &str;

    fn env_variables(&self) -> &EnvVariables;

    fn env_variables_mut(&mut self) -> &mut EnvVariables;
}

/// A named group of secret environment variables shared across pipelines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub env_variables: EnvVariables,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            env_variables: EnvVariables::new(),
        }
    }

    pub fn with_env_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.env_variables.insert(name);
        }
        self
    }
}

impl EnvVariableScope for Context {
    fn scope_key(&self) -> &str {
        &self.name
    }

    fn env_variables(&self) -> &EnvVariables {
        &self.env_variables
    }

    fn env_variables_mut(&mut self) -> &mut EnvVariables {
        &mut self.env_variables
    }
}

/// CI metadata for a followed repository, keyed by its slug (`gh/org/repo`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub env_variables: EnvVariables,
}

impl Project {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: None,
            env_variables: EnvVariables::new(),
        }
    }

    pub fn with_env_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.env_variables.insert(name);
        }
        self
    }
}

impl EnvVariableScope for Project {
    fn scope_key(&self) -> &str {
        &self.slug
    }

    fn env_variables(&self) -> &EnvVariables {
        &self.env_variables
    }

    fn env_variables_mut(&mut self) -> &mut EnvVariables {
        &mut self.env_variables
    }
}
