//! Render variables as `environment.sh` content.

use std::borrow::Cow;

use crate::environment::EnvVars;

/// One `export KEY=VALUE` line per variable, in mapping order.
pub fn render_exports(vars: &EnvVars) -> String {
    vars.iter()
        .map(|(key, value)| {
            format!(
                "export {key}={}\n",
                shell_escape::unix::escape(Cow::Borrowed(value.as_str()))
            )
        })
        .collect()
}
