//! Shared utilities for the Scientific Filesystem tools.
//!
//! This crate provides cross-cutting concerns used by the other SCIF crates,
//! currently the unified error type and its result alias.

pub mod errors;
