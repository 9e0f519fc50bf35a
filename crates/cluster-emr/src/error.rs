use steprunner_cluster::ListingClientError;
use thiserror::Error;

/// Result type for EMR listing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the EMR listing client.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure from the EMR service or the transport beneath it.
    #[error(transparent)]
    Emr(#[from] aws_sdk_emr::Error),

    /// A listed cluster was missing its id, name, or status.
    #[error("missing cluster details in listing response")]
    MissingDetails,

    /// The control plane reported a state this crate does not know.
    #[error("unrecognized cluster state `{0}`")]
    UnrecognizedState(String),
}

impl ListingClientError for Error {}
