//! Graph-specific error types.

use thiserror::Error;
use tn_core::TnError;

/// Errors raised by [`crate::NetworkBuilder`] when a declaration would be
/// silently ignored by [`crate::TransitGraph`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two stations were declared with the same name.
    #[error("Station '{name}' is declared more than once")]
    DuplicateStation { name: String },

    /// A route names a station that was never declared.
    #[error("Route {from} -> {to} refers to unknown station '{name}'")]
    UnknownStation {
        from: String,
        to: String,
        name: String,
    },
}

impl From<GraphError> for TnError {
    fn from(err: GraphError) -> Self {
        // Both are malformed declarations, not failed lookups.
        TnError::invalid_arg(err.to_string())
    }
}
