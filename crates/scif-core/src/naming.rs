//! Environment variable naming.
//!
//! Scoped keys look like `SCIF_APPBIN_google_drive`; unscoped keys (the
//! active app's variables) look like `SCIF_APPBIN`. Hyphens become
//! underscores in keys only, never in values.

/// Namespace prefix every SCIF variable is expected to carry.
pub const SCIF_PREFIX: &str = "SCIF";

/// Build the variable name for `field`, optionally scoped to `app`.
pub fn env_key(field: &str, app: Option<&str>) -> String {
    let key = format!("{SCIF_PREFIX}_{}", field.to_uppercase().replace('-', "_"));
    match app {
        Some(app) => format!("{key}_{}", app_segment(app)),
        None => key,
    }
}

/// Key segment used for `app` in scoped variable names.
pub fn app_segment(app: &str) -> String {
    app.replace('-', "_")
}

/// Whether `key` lives in the SCIF namespace.
pub fn is_namespaced(key: &str) -> bool {
    key.starts_with(SCIF_PREFIX)
}
