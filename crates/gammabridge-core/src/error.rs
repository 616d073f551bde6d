//! Error types for the bridge.

use thiserror::Error;

/// Errors raised while marshalling error metadata across the boundary.
///
/// Lookup misses are never errors: an unknown code is `None` and an unknown
/// name is `0`.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Reserving the owned copy of a native string failed.
    ///
    /// Only produced under [`AllocPolicy::Propagate`](crate::AllocPolicy);
    /// the default policy aborts instead.
    #[error("allocation of {len} bytes for an owned copy failed")]
    AllocationFailure { len: usize },

    /// A configuration value could not be parsed.
    #[error("invalid configuration for {key}: {value:?}")]
    Config { key: &'static str, value: String },
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
