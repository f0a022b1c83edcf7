//! The parsed recipe object.
//!
//! Recipe text parsing lives outside this crate; whatever parser reads a
//! `.scif` file hands over a [`Recipe`]. The environment engine only looks
//! at the app names, while installers read the per-app sections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use scif_util::errors::{ScifError, ScifResult};

/// A recipe: an insertion-ordered collection of named apps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub apps: IndexMap<String, AppRecipe>,
}

/// Sections declared for one app. Each section is kept as raw lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppRecipe {
    #[serde(default, rename = "appinstall")]
    pub install: Vec<String>,
    #[serde(default, rename = "apprun")]
    pub run: Vec<String>,
    #[serde(default, rename = "appenv")]
    pub environment: Vec<String>,
    #[serde(default, rename = "applabels")]
    pub labels: Vec<String>,
    #[serde(default, rename = "appfiles")]
    pub files: Vec<String>,
    #[serde(default, rename = "apphelp")]
    pub help: Vec<String>,
    #[serde(default, rename = "apptest")]
    pub test: Vec<String>,
    #[serde(default, rename = "appcommands")]
    pub commands: Vec<String>,
}

impl Recipe {
    /// Build a recipe with empty sections for each name, in order.
    pub fn from_app_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            apps: names
                .into_iter()
                .map(|n| (n.into(), AppRecipe::default()))
                .collect(),
        }
    }

    /// Parse a recipe object from its JSON representation.
    pub fn from_json(json: &str) -> ScifResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            ScifError::Recipe {
                message: format!("Failed to parse recipe JSON: {e}"),
            }
            .into()
        })
    }

    /// Parse a recipe object from its TOML representation.
    pub fn from_toml(toml_str: &str) -> ScifResult<Self> {
        toml::from_str(toml_str).map_err(|e| {
            ScifError::Recipe {
                message: format!("Failed to parse recipe TOML: {e}"),
            }
            .into()
        })
    }

    /// App names in recipe order.
    pub fn app_names(&self) -> impl Iterator<Item = &str> {
        self.apps.keys().map(String::as_str)
    }

    pub fn contains(&self, app: &str) -> bool {
        self.apps.contains_key(app)
    }

    pub fn get(&self, app: &str) -> Option<&AppRecipe> {
        self.apps.get(app)
    }

    /// Add or replace an app, keeping its original position if it existed.
    pub fn insert_app(&mut self, name: impl Into<String>, app: AppRecipe) {
        self.apps.insert(name.into(), app);
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
