//! Core types for the Scientific Filesystem (SCIF).
//!
//! This crate defines the parsed recipe object, the convention that maps an
//! app name and base root to its filesystem paths, the namespaced
//! environment variables derived from those paths, and the per-session
//! accumulated environment that process launchers and installers consume.
//!
//! This crate is intentionally free of async code, process spawning, and
//! filesystem writes.

/// Default base root under which all apps and data directories live.
pub const DEFAULT_BASE: &str = "/scif";

/// Default shell used by collaborators that run app scripts.
pub const DEFAULT_SHELL: &str = "/bin/bash";

pub mod config;
pub mod environment;
pub mod namespace;
pub mod naming;
pub mod paths;
pub mod recipe;
pub mod session;
pub mod shell;
