//! Error types: the failure raised by generated code and the crate's own
//! error type for its configuration and serialization surfaces.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure raised by generated failable members.
///
/// Synthesized members never produce this at synthesis time; it is baked into
/// the body of a failable method whose return type has no safe default so
/// callers receive an actionable error instead of a crash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(tag = "case", rename_all = "camelCase")]
#[non_exhaustive]
pub enum NoopError {
    /// No default value could be produced for `type_name`.
    #[error(
        "NoopImplementation could not generate a default value for type '{type_name}'. \
         The function throwing this error is effectively unimplemented."
    )]
    #[serde(rename_all = "camelCase")]
    DefaultValueUnavailable {
        /// Spelling of the type lacking a default.
        type_name: String,
    },
}

impl NoopError {
    /// Name of the type that could not be defaulted.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::DefaultValueUnavailable { type_name } => type_name,
        }
    }
}

/// Errors raised by the surfaces around synthesis.
///
/// Synthesis itself never fails; these cover option loading and JSON
/// interchange only.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Options could not be gathered from their providers.
    #[error("Failed to load synthesis options: {0}")]
    Config(#[from] Box<figment::Error>),

    /// A document could not be encoded or decoded.
    #[cfg(feature = "serde_json")]
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for SynthError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}
