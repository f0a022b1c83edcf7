use scif_core::config::ScifConfig;
use scif_core::environment::EnvAction;
use scif_core::recipe::Recipe;
use scif_core::session::ScifSession;
use scif_util::errors::ScifError;

fn session_with(apps: &[&str]) -> ScifSession {
    ScifSession::with_recipe(
        ScifConfig::default(),
        Recipe::from_app_names(apps.iter().copied()),
    )
}

#[test]
fn test_apps_listed_in_recipe_order() {
    let session = session_with(&["registry", "google-drive"]);
    assert_eq!(session.apps(), vec!["registry", "google-drive"]);
    assert!(ScifSession::default().apps().is_empty());
}

#[test]
fn test_set_then_get_round_trips() {
    let mut session = ScifSession::default();
    assert_eq!(session.set_variable("SCIF_GREETING", "hello"), EnvAction::New);
    assert_eq!(session.get_variable("SCIF_GREETING"), Some("hello"));
    assert_eq!(session.set_variable("SCIF_GREETING", "bye"), EnvAction::Update);
    assert_eq!(session.get_variable("SCIF_GREETING"), Some("bye"));
}

#[test]
fn test_get_absent_key_returns_none() {
    let mut session = ScifSession::default();
    assert_eq!(session.get_variable("SCIF_MISSING"), None);
    session.set_variable("SCIF_PRESENT", "1");
    assert_eq!(session.get_variable("SCIF_MISSING"), None);
}

#[test]
fn test_environment_uninitialized_until_first_write() {
    let mut session = ScifSession::default();
    assert!(session.environment().is_none());
    session.set_variable("OUTSIDE", "x");
    let env = session.environment().unwrap();
    assert_eq!(env.get("OUTSIDE"), Some("x"));
}

#[test]
fn test_refresh_merges_namespace() {
    let mut session = session_with(&["registry", "hello"]);
    session.set_variable("SCIF_CUSTOM", "keep");

    let env = session.refresh_environment(false).unwrap();
    assert_eq!(env.len(), 21);
    assert_eq!(env.get("SCIF_CUSTOM"), Some("keep"));
    assert_eq!(env.get("SCIF_APPBIN_hello"), Some("/scif/apps/hello/bin"));
}

#[test]
fn test_refresh_with_reset_drops_accumulated_state() {
    let mut session = session_with(&["registry"]);
    session.set_variable("SCIF_CUSTOM", "gone");

    let env = session.refresh_environment(true).unwrap();
    assert_eq!(env.len(), 10);
    assert_eq!(env.get("SCIF_CUSTOM"), None);
}

#[test]
fn test_refresh_later_values_win() {
    let mut session = session_with(&["registry"]);
    session.set_variable("SCIF_APPBIN_registry", "/stale");
    let env = session.refresh_environment(false).unwrap();
    assert_eq!(env.get("SCIF_APPBIN_registry"), Some("/scif/apps/registry/bin"));
}

#[test]
fn test_refresh_without_recipe_is_noop() {
    let mut session = ScifSession::default();
    session.set_variable("SCIF_ONLY", "1");
    let env = session.refresh_environment(false).unwrap();
    assert_eq!(env.len(), 1);
    assert_eq!(env.get("SCIF_ONLY"), Some("1"));
}

#[test]
fn test_refresh_without_recipe_leaves_uninitialized_state() {
    let mut session = ScifSession::default();
    assert!(session.refresh_environment(false).is_none());
    assert!(session.environment().is_none());
}

#[test]
fn test_refresh_reset_without_recipe_yields_empty_environment() {
    let mut session = ScifSession::default();
    session.set_variable("SCIF_ONLY", "1");
    let env = session.refresh_environment(true).unwrap();
    assert!(env.is_empty());
}

#[test]
fn test_refresh_uses_active_app() {
    let mut session = session_with(&["registry", "hello"]);
    session.activate("registry").unwrap();

    let env = session.refresh_environment(true).unwrap();
    assert_eq!(env.len(), 30);
    assert_eq!(env.get("SCIF_APPROOT"), Some("/scif/apps/registry"));
}

#[test]
fn test_activate_unknown_app_fails_with_valid_list() {
    let mut session = session_with(&["registry", "hello"]);
    let err = session.activate("nope").unwrap_err();
    match &err {
        ScifError::UnknownApp { app, valid } => {
            assert_eq!(app, "nope");
            assert_eq!(valid, &vec!["registry".to_string(), "hello".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(session.active(), None);
}

#[test]
fn test_only_one_app_active_at_a_time() {
    let mut session = session_with(&["registry", "hello"]);
    session.activate("registry").unwrap();
    session.activate("hello").unwrap();
    assert_eq!(session.active(), Some("hello"));

    let env = session.refresh_environment(true).unwrap();
    assert_eq!(env.len(), 30);
    assert_eq!(env.get("SCIF_APPROOT"), Some("/scif/apps/hello"));

    session.deactivate();
    assert_eq!(session.active(), None);
}

#[test]
fn test_compute_app_environment_unknown_app() {
    let session = session_with(&["registry"]);
    let err = session.compute_app_environment("nope", false).unwrap_err();
    assert_eq!(err.to_string(), "nope is not a valid app. Found registry");
}

#[test]
fn test_compute_app_environment_without_recipe() {
    let session = ScifSession::default();
    assert!(session.compute_app_environment("registry", true).is_err());
}

#[test]
fn test_compute_app_environment_merges_session_state() {
    let mut session = session_with(&["registry", "hello"]);
    session.set_variable("SCIF_CUSTOM", "1");
    session.set_variable("SCIF_APPBIN", "/overridden");

    let appenv = session.compute_app_environment("registry", false).unwrap();
    assert_eq!(appenv.app, "registry");
    assert_eq!(appenv.lookup.approot, "/scif/apps/registry");
    assert_eq!(
        appenv.variables.get("SCIF_CUSTOM").map(String::as_str),
        Some("1")
    );
    assert_eq!(
        appenv.variables.get("SCIF_APPBIN").map(String::as_str),
        Some("/scif/apps/registry/bin")
    );
    assert_eq!(appenv.variables.len(), 11);
}

#[test]
fn test_compute_isolated_excludes_session_state() {
    let mut session = session_with(&["registry", "hello"]);
    session.set_variable("SCIF_CUSTOM", "1");
    session.refresh_environment(false);

    let appenv = session.compute_app_environment("hello", true).unwrap();
    assert!(appenv.variables.is_empty());
    assert!(!appenv.exports().contains_key("SCIF_CUSTOM"));
    assert!(!appenv.exports().contains_key("SCIF_APPBIN_registry"));

    let lookup = appenv.lookup_map();
    assert_eq!(lookup.len(), 1);
    let fields = &lookup["hello"];
    assert_eq!(fields.len(), 11);
    assert_eq!(fields["appdata"], "/scif/data/hello");
}

#[test]
fn test_compute_does_not_mutate_session() {
    let mut session = session_with(&["registry"]);
    session.set_variable("SCIF_CUSTOM", "1");
    session.compute_app_environment("registry", false).unwrap();
    assert_eq!(session.environment().unwrap().len(), 1);
}

#[test]
fn test_exports_combine_scoped_and_variables() {
    let mut session = session_with(&["google-drive"]);
    session.set_variable("SCIF_CUSTOM", "1");

    let exports = session
        .compute_app_environment("google-drive", false)
        .unwrap()
        .exports();
    assert_eq!(exports.len(), 21);
    assert_eq!(
        exports.get("SCIF_APPDATA_google_drive").map(String::as_str),
        Some("/scif/data/google-drive")
    );
    assert_eq!(
        exports.get("SCIF_APPDATA").map(String::as_str),
        Some("/scif/data/google-drive")
    );
}

#[test]
fn test_app_lookup_and_set_base() {
    let mut session = session_with(&["registry"]);
    session.set_base("/opt/scif");
    assert_eq!(session.base(), "/opt/scif");
    let paths = session.app_lookup("registry").unwrap();
    assert_eq!(paths.appbin, "/opt/scif/apps/registry/bin");
}

#[test]
fn test_reset_clears_environment() {
    let mut session = session_with(&["registry"]);
    session.refresh_environment(false);
    session.reset();
    assert!(session.environment().is_none());
    assert_eq!(session.get_variable("SCIF_APPBIN_registry"), None);
}

#[test]
fn test_load_recipe_drops_stale_active_app() {
    let mut session = session_with(&["registry"]);
    session.activate("registry").unwrap();
    session.load_recipe(Recipe::from_app_names(["hello"]));
    assert_eq!(session.active(), None);
    assert_eq!(session.apps(), vec!["hello"]);
}

#[test]
fn test_independent_sessions_do_not_share_state() {
    let mut a = session_with(&["registry"]);
    let b = session_with(&["registry"]);
    a.set_variable("SCIF_ONLY_A", "1");
    assert!(b.environment().is_none());
}
