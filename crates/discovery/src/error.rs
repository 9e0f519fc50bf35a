use steprunner_cluster::{ClusterState, ListingClientError};
use thiserror::Error;

/// Result type for discovery operations, generic over the listing client's
/// error type.
pub type Result<T, LE> = std::result::Result<T, Error<LE>>;

/// Errors surfaced by cluster discovery.
///
/// Each variant is a terminal outcome for the attempt: retrying with the
/// same inputs cannot succeed without external remediation (renaming or
/// terminating a duplicate, or waiting for a state change).
#[derive(Debug, Error)]
pub enum Error<LE>
where
    LE: ListingClientError,
{
    /// More than one candidate-state cluster carries the target name.
    #[error("cluster name must be unique for safe discovery - found {count} with name {name}")]
    AmbiguousName {
        /// The name being resolved.
        name: String,

        /// How many clusters on the page carried the name.
        count: usize,
    },

    /// Transport or authorization failure from the listing client,
    /// propagated unchanged.
    #[error(transparent)]
    Listing(LE),

    /// A uniquely named cluster exists but cannot accept new steps.
    #[error("cluster must be in WAITING state before new steps can be submitted - found {state}")]
    NotReady {
        /// The name being resolved.
        name: String,

        /// The state the cluster was found in.
        state: ClusterState,
    },
}
