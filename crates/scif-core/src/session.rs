//! Recipe session state.
//!
//! A [`ScifSession`] owns everything one interaction with a scientific
//! filesystem needs: its configuration (base root), the parsed recipe, the
//! active app, and the accumulated environment. Sessions are independent;
//! nothing here is process-global.

use indexmap::IndexMap;
use serde::Serialize;

use scif_util::errors::ScifError;

use crate::config::ScifConfig;
use crate::environment::{EnvAction, EnvVars, Environment};
use crate::namespace::{build_namespace, scoped_vars, unscoped_vars};
use crate::paths::{resolve, AppPaths};
use crate::recipe::Recipe;

/// The environment computed for a single app.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppEnvironment {
    pub app: String,
    pub lookup: AppPaths,
    /// Accumulated session variables overlaid with this app's unscoped
    /// variables. Empty for an isolated computation.
    pub variables: EnvVars,
}

impl AppEnvironment {
    /// Two-level `app -> field -> value` view of the lookup.
    pub fn lookup_map(&self) -> IndexMap<String, IndexMap<String, String>> {
        let mut map = IndexMap::new();
        map.insert(self.app.clone(), self.lookup.to_lookup());
        map
    }

    /// Everything a launcher exports when running this app: its scoped
    /// variables followed by [`AppEnvironment::variables`].
    pub fn exports(&self) -> EnvVars {
        let mut vars: EnvVars = scoped_vars(&self.lookup).collect();
        vars.extend(self.variables.iter().map(|(k, v)| (k.clone(), v.clone())));
        vars
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScifSession {
    config: ScifConfig,
    recipe: Option<Recipe>,
    active: Option<String>,
    environment: Option<Environment>,
}

impl ScifSession {
    pub fn new(config: ScifConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_recipe(config: ScifConfig, recipe: Recipe) -> Self {
        Self {
            config,
            recipe: Some(recipe),
            ..Default::default()
        }
    }

    pub fn config(&self) -> &ScifConfig {
        &self.config
    }

    pub fn base(&self) -> &str {
        &self.config.base
    }

    /// Change the base root used by subsequent computations.
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.config.base = base.into();
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// Attach a recipe, replacing any previous one. An active app that the
    /// new recipe does not define is dropped.
    pub fn load_recipe(&mut self, recipe: Recipe) {
        if let Some(active) = &self.active {
            if !recipe.contains(active) {
                tracing::debug!("Deactivating {active}: not defined by the new recipe");
                self.active = None;
            }
        }
        self.recipe = Some(recipe);
    }

    /// App names in recipe order; empty when no recipe is loaded.
    pub fn apps(&self) -> Vec<&str> {
        self.recipe
            .as_ref()
            .map(|r| r.app_names().collect())
            .unwrap_or_default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Designate `app` as the active app, replacing any previous one.
    pub fn activate(&mut self, app: &str) -> Result<(), ScifError> {
        self.validate_app(app)?;
        tracing::debug!("Activating app {app}");
        self.active = Some(app.to_string());
        Ok(())
    }

    pub fn deactivate(&mut self) {
        if let Some(app) = self.active.take() {
            tracing::debug!("Deactivating app {app}");
        }
    }

    /// Path set of a known app.
    pub fn app_lookup(&self, app: &str) -> Result<AppPaths, ScifError> {
        self.validate_app(app)?;
        Ok(resolve(app, &self.config.base))
    }

    /// Compute the environment visible to `app` while it runs.
    ///
    /// With `isolated`, only the app's own lookup is returned and no session
    /// variables are merged in.
    pub fn compute_app_environment(
        &self,
        app: &str,
        isolated: bool,
    ) -> Result<AppEnvironment, ScifError> {
        let lookup = self.app_lookup(app)?;

        let mut variables = EnvVars::new();
        if !isolated {
            if let Some(env) = &self.environment {
                variables.extend(env.iter().map(|(k, v)| (k.to_string(), v.to_string())));
            }
            variables.extend(unscoped_vars(&lookup));
        }

        Ok(AppEnvironment {
            app: app.to_string(),
            lookup,
            variables,
        })
    }

    /// Recompute the recipe namespace and merge it into the accumulated
    /// environment. With `reset`, previous state is dropped first.
    ///
    /// Without a recipe the accumulated state is returned as is, which is
    /// `None` if nothing was ever set.
    pub fn refresh_environment(&mut self, reset: bool) -> Option<&Environment> {
        if reset {
            self.environment = Some(Environment::new());
        }

        if let Some(recipe) = &self.recipe {
            let updates = build_namespace(recipe, &self.config.base, self.active.as_deref());
            tracing::debug!("Merging {} namespace variables", updates.len());
            self.environment
                .get_or_insert_with(Environment::new)
                .merge(updates);
        }
        self.environment.as_ref()
    }

    /// Set a single accumulated variable.
    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<String>) -> EnvAction {
        self.environment
            .get_or_insert_with(Environment::new)
            .set(key, value)
    }

    /// Look up a single accumulated variable.
    pub fn get_variable(&self, key: &str) -> Option<&str> {
        let value = self.environment.as_ref()?.get(key)?;
        tracing::info!("{value}");
        Some(value)
    }

    /// The whole accumulated environment, or `None` before anything was set.
    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    /// Drop all accumulated state.
    pub fn reset(&mut self) {
        self.environment = None;
    }

    fn validate_app(&self, app: &str) -> Result<(), ScifError> {
        match &self.recipe {
            Some(recipe) if recipe.contains(app) => Ok(()),
            _ => {
                let err = ScifError::unknown_app(app, self.apps());
                tracing::error!("{err}");
                Err(err)
            }
        }
    }
}
