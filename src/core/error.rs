//! Error types for the preset engine.
//!
//! Only configuration errors are fatal. Everything else is recovered close to
//! where it happens so the render loop keeps running.

use thiserror::Error;

/// Raised while building the preset registry; there is no valid initial
/// state when one of these occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("preset registry is empty")]
    EmptyRegistry,
    #[error("preset '{preset}' parameter set differs from '{reference}' (missing: {missing:?}, unexpected: {unexpected:?})")]
    ParamMismatch {
        preset: String,
        reference: String,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    #[error("preset '{preset}' defines '{param}' as a {found}, expected a {expected}")]
    KindMismatch {
        preset: String,
        param: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Rejected direct parameter writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("unknown parameter '{0}'")]
    Unknown(String),
    #[error("parameter '{param}' is a {expected}, got a {found}")]
    KindMismatch {
        param: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("parameter '{param}' takes {expected} components, got {found}")]
    Length {
        param: String,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
