//! App path resolution.
//!
//! Every app installed into a scientific filesystem gets the same layout
//! under the base root:
//!
//! ```text
//! <base>/apps/<app>                        approot
//! <base>/apps/<app>/bin                    appbin
//! <base>/apps/<app>/lib                    applib
//! <base>/apps/<app>/scif                   appmeta
//! <base>/apps/<app>/scif/runscript         apprun
//! <base>/apps/<app>/scif/runscript.help    apphelp
//! <base>/apps/<app>/scif/labels.json       applabels
//! <base>/apps/<app>/scif/environment.sh    appenv
//! <base>/apps/<app>/scif/<app>.scif        apprecipe
//! <base>/data/<app>                        appdata
//! ```
//!
//! Paths are built by string concatenation only and are never checked
//! against the real filesystem.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// One of the ten path-valued fields every app gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathField {
    AppData,
    AppRoot,
    AppMeta,
    AppBin,
    AppLib,
    AppRun,
    AppHelp,
    AppLabels,
    AppEnv,
    AppRecipe,
}

impl PathField {
    /// All path fields in the order they are emitted.
    pub const ALL: [PathField; 10] = [
        PathField::AppData,
        PathField::AppRoot,
        PathField::AppMeta,
        PathField::AppBin,
        PathField::AppLib,
        PathField::AppRun,
        PathField::AppHelp,
        PathField::AppLabels,
        PathField::AppEnv,
        PathField::AppRecipe,
    ];

    /// Lowercase field name, as used in lookups and in variable names.
    pub fn as_str(&self) -> &'static str {
        match self {
            PathField::AppData => "appdata",
            PathField::AppRoot => "approot",
            PathField::AppMeta => "appmeta",
            PathField::AppBin => "appbin",
            PathField::AppLib => "applib",
            PathField::AppRun => "apprun",
            PathField::AppHelp => "apphelp",
            PathField::AppLabels => "applabels",
            PathField::AppEnv => "appenv",
            PathField::AppRecipe => "apprecipe",
        }
    }
}

impl fmt::Display for PathField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical set of paths for one app under one base root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppPaths {
    pub appname: String,
    pub appdata: String,
    pub approot: String,
    pub appmeta: String,
    pub appbin: String,
    pub applib: String,
    pub apprun: String,
    pub apphelp: String,
    pub applabels: String,
    pub appenv: String,
    pub apprecipe: String,
}

impl AppPaths {
    /// Value of a single path field.
    pub fn get(&self, field: PathField) -> &str {
        match field {
            PathField::AppData => &self.appdata,
            PathField::AppRoot => &self.approot,
            PathField::AppMeta => &self.appmeta,
            PathField::AppBin => &self.appbin,
            PathField::AppLib => &self.applib,
            PathField::AppRun => &self.apprun,
            PathField::AppHelp => &self.apphelp,
            PathField::AppLabels => &self.applabels,
            PathField::AppEnv => &self.appenv,
            PathField::AppRecipe => &self.apprecipe,
        }
    }

    /// Iterate over `(field, path)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (PathField, &str)> + '_ {
        PathField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Flat `field -> value` lookup, including `appname`.
    pub fn to_lookup(&self) -> IndexMap<String, String> {
        let mut lookup: IndexMap<String, String> = self
            .iter()
            .map(|(field, value)| (field.as_str().to_string(), value.to_string()))
            .collect();
        lookup.insert("appname".to_string(), self.appname.clone());
        lookup
    }
}

/// Strip trailing slashes so `/scif/` and `/scif` resolve identically.
pub fn normalize_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// Derive the path set for `app` under `base`.
///
/// The caller is responsible for checking that `app` belongs to the recipe.
pub fn resolve(app: &str, base: &str) -> AppPaths {
    let base = normalize_base(base);

    let appdata = format!("{base}/data/{app}");
    let approot = format!("{base}/apps/{app}");
    let appmeta = format!("{approot}/scif");
    let apprun = format!("{appmeta}/runscript");

    AppPaths {
        appname: app.to_string(),
        appbin: format!("{approot}/bin"),
        applib: format!("{approot}/lib"),
        apphelp: format!("{apprun}.help"),
        applabels: format!("{appmeta}/labels.json"),
        appenv: format!("{appmeta}/environment.sh"),
        apprecipe: format!("{appmeta}/{app}.scif"),
        appdata,
        approot,
        appmeta,
        apprun,
    }
}
