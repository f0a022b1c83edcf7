//! Full-recipe namespace derivation.
//!
//! Every app in a recipe contributes its ten path variables under scoped
//! keys, so apps can find each other regardless of which one is running.
//! The active app, if any, is additionally exposed under unscoped keys.
//!
//! For an app called `google-drive` under `/scif`:
//!
//! ```text
//! SCIF_APPDATA_google_drive=/scif/data/google-drive
//! SCIF_APPROOT_google_drive=/scif/apps/google-drive
//! SCIF_APPBIN_google_drive=/scif/apps/google-drive/bin
//! ...
//! ```

use crate::environment::EnvVars;
use crate::naming::env_key;
use crate::paths::{resolve, AppPaths};
use crate::recipe::Recipe;

/// Scoped `(key, value)` pairs for one app.
pub fn scoped_vars(paths: &AppPaths) -> impl Iterator<Item = (String, String)> + '_ {
    paths.iter().map(move |(field, value)| {
        (
            env_key(field.as_str(), Some(&paths.appname)),
            value.to_string(),
        )
    })
}

/// Unscoped `(key, value)` pairs, exposing one app as the active one.
pub fn unscoped_vars(paths: &AppPaths) -> impl Iterator<Item = (String, String)> + '_ {
    paths
        .iter()
        .map(|(field, value)| (env_key(field.as_str(), None), value.to_string()))
}

/// Build the namespaced variables for every app in `recipe`.
///
/// An `active` name that is not part of the recipe contributes nothing.
pub fn build_namespace(recipe: &Recipe, base: &str, active: Option<&str>) -> EnvVars {
    let mut envars = EnvVars::new();

    for name in recipe.app_names() {
        let paths = resolve(name, base);
        envars.extend(scoped_vars(&paths));

        if active == Some(name) {
            envars.extend(unscoped_vars(&paths));
        }
    }

    envars
}
