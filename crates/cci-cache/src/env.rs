use cci_core::{Context, EnvVariableScope, Project};

use crate::error::{CacheError, Result};
use crate::store::Store;

/// Contexts keyed by name.
pub type ContextStore = Store<String, Context>;

/// Projects keyed by slug.
pub type ProjectStore = Store<String, Project>;

impl<V> Store<String, V>
where
    V: EnvVariableScope + Clone,
{
    /// Appends `variable` to the record stored under `key` unless it is already listed.
    ///
    /// The lookup, check and append happen under one lock acquisition. Returns
    /// whether the variable was appended.
    pub fn add_env_variable(&self, key: &str, variable: impl Into<String>) -> Result<bool> {
        let variable = variable.into();
        self.update(key, |record| record.env_variables_mut().insert(variable))
            .ok_or_else(|| CacheError::missing(self.name(), key))
    }

    /// Stores `record` under its own key (context name or project slug).
    pub fn set_record(&self, record: V) -> V {
        self.set(record.scope_key().to_owned(), record)
    }
}

impl ContextStore {
    pub fn set_context(&self, context: Context) -> Context {
        self.set_record(context)
    }
}

impl ProjectStore {
    pub fn set_project(&self, project: Project) -> Project {
        self.set_record(project)
    }
}
