//! Core types and the listing capability for cluster discovery.
//!
//! The control plane exposes clusters only through a paginated listing API,
//! so discovery is driven by repeated [`ListingClient::list_clusters`] calls
//! chained through an opaque continuation marker.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::error::Error;
use std::fmt::{self, Debug};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Marker trait for listing client errors.
pub trait ListingClientError: Error + Send + Sync + 'static {}

/// Opaque cluster identifier, stable for the cluster's lifetime.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct ClusterId(String);

impl ClusterId {
    /// Creates a cluster id from its string form.
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ClusterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ClusterId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Lifecycle state of a cluster as reported by the control plane.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterState {
    /// Instances are being provisioned.
    Starting,

    /// Bootstrap actions are running on the provisioned instances.
    Bootstrapping,

    /// The cluster is idle and ready to accept new steps.
    Waiting,

    /// The cluster is actively running a step.
    Running,

    /// The cluster is shutting down.
    Terminating,

    /// The cluster has been shut down.
    Terminated,

    /// The cluster shut down after a failure.
    TerminatedWithErrors,
}

impl ClusterState {
    /// The control plane's wire name for this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "STARTING",
            Self::Bootstrapping => "BOOTSTRAPPING",
            Self::Waiting => "WAITING",
            Self::Running => "RUNNING",
            Self::Terminating => "TERMINATING",
            Self::Terminated => "TERMINATED",
            Self::TerminatedWithErrors => "TERMINATED_WITH_ERRORS",
        }
    }
}

impl fmt::Display for ClusterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cluster as returned by the listing API.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Stable identifier.
    pub id: ClusterId,

    /// Human-assigned name. Not guaranteed unique across all clusters.
    pub name: String,

    /// Current lifecycle state.
    pub state: ClusterState,
}

/// One page of listing results plus the continuation marker, if any.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClusterPage {
    /// Clusters on this page, in the order the control plane returned them.
    pub clusters: Vec<ClusterSummary>,

    /// Cursor for the next page. `None` means this is the last page.
    pub marker: Option<String>,
}

/// A client capable of listing clusters by state, one page at a time.
#[async_trait]
pub trait ListingClient
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the listing client.
    type Error: ListingClientError;

    /// Fetches one page of clusters in any of the given states.
    ///
    /// `marker` chains pages: `None` requests the first page, and
    /// implementations must omit the cursor from the underlying request
    /// entirely in that case rather than sending an empty sentinel.
    async fn list_clusters(
        &self,
        states: &[ClusterState],
        marker: Option<&str>,
    ) -> Result<ClusterPage, Self::Error>;
}
