//! Error types for the mock listing client.

use steprunner_cluster::ListingClientError;
use thiserror::Error;

/// Error type for the mock listing client.
#[derive(Clone, Debug, Error)]
pub enum Error {
    /// An injected fault, scripted via [`crate::MockListingClient::fail_for`].
    #[error("injected listing fault")]
    Fault,

    /// A request carried a continuation marker no fixture was registered for.
    #[error("no page registered for marker {0}")]
    UnknownMarker(String),
}

impl ListingClientError for Error {}
