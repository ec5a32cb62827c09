//! Error types for the routing crate.

use lsqecc_patches::SliceError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::router::GraphSearchProvider;

/// Errors that can occur while configuring or querying a router.
///
/// A query that finds no connecting path is not an error; routers report
/// it as `Ok(None)`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RouteError {
    /// Error from the slice model, e.g. an unknown patch id.
    #[error("Slice error: {0}")]
    Slice(#[from] SliceError),

    /// Extended routing requested on a router that cannot provide it.
    #[error("EDPC not implemented for {router}: {reason}")]
    EdpcUnsupported {
        /// Name of the router that rejected the request.
        router: String,
        /// Why the request was rejected.
        reason: String,
    },

    /// Provider cannot be combined with the router's current mode.
    #[error("Graph search provider '{provider}' does not support EDPC, which is enabled")]
    IncompatibleProvider {
        /// The rejected provider.
        provider: GraphSearchProvider,
    },

    /// Invalid router configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
