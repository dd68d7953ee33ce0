//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `PhError` into them
//! via `From` impls, so `?` works across layer boundaries.

use thiserror::Error;

/// The base error type for `ph-core` and its dependents.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
}

/// Shorthand result type for all `ph-*` crates.
pub type PhResult<T> = Result<T, PhError>;
