use serde::{Deserialize, Serialize};

/// Ordered list of environment variable names with set semantics.
///
/// Insertion order is preserved; a name that is already present (exact,
/// case-sensitive match) is never appended twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct EnvVariables(Vec<String>);

impl EnvVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` unless it is already present. Returns whether it was appended.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for EnvVariables {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vars = Self::new();
        for name in iter {
            vars.insert(name);
        }
        vars
    }
}

// API payloads may contain duplicates; normalize on the way in.
impl From<Vec<String>> for EnvVariables {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<EnvVariables> for Vec<String> {
    fn from(vars: EnvVariables) -> Self {
        vars.0
    }
}
