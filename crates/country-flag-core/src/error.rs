// crates/country-flag-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the country registry and its UI seam.
///
/// Lookups themselves never fail: a missing country is `None`. These
/// variants cover the few places where something outside the lookup path
/// can go wrong.
#[derive(Debug, Error)]
pub enum FlagError {
    /// The country table document could not be parsed.
    #[error("malformed country table: {0}")]
    Json(#[from] serde_json::Error),

    /// A caller required a country and none matched.
    #[error("no country found for: {0}")]
    NotFound(String),

    /// The UI host could not create or attach the flag element.
    #[error("element host error: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, FlagError>;
