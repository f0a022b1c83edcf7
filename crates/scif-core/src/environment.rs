//! Accumulated environment store.
//!
//! A session keeps one [`Environment`] holding every variable set on it,
//! either explicitly or by merging a computed namespace. Keys are unique and
//! the last write wins; iteration follows first-insertion order.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::naming::is_namespaced;

/// Ordered `name -> value` mapping of environment variables.
pub type EnvVars = IndexMap<String, String>;

/// Whether a write created a variable or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvAction {
    New,
    Update,
}

impl fmt::Display for EnvAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvAction::New => f.write_str("new"),
            EnvAction::Update => f.write_str("update"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Environment {
    vars: EnvVars,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a variable.
    ///
    /// Keys outside the `SCIF` namespace are accepted with a warning.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> EnvAction {
        let key = key.into();
        let value = value.into();

        if !is_namespaced(&key) {
            tracing::warn!("Environment variable outside SCIF namespace not recommended: {key}");
        }

        let action = if self.vars.contains_key(&key) {
            EnvAction::Update
        } else {
            EnvAction::New
        };

        tracing::debug!("[environment:{action}][{key}={value}]");
        self.vars.insert(key, value);
        action
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Merge `updates` into the store; colliding keys take the new value.
    pub fn merge<I, K, V>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in updates {
            self.vars.insert(key.into(), value.into());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn as_map(&self) -> &EnvVars {
        &self.vars
    }

    pub fn into_map(self) -> EnvVars {
        self.vars
    }
}

impl From<EnvVars> for Environment {
    fn from(vars: EnvVars) -> Self {
        Self { vars }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut env = Environment::new();
        env.merge(iter);
        env
    }
}
