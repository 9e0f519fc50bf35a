//! Implementation of the cluster listing client backed by AWS EMR.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::{Error, Result};

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_emr::types as emr;
use steprunner_cluster::{ClusterId, ClusterPage, ClusterState, ClusterSummary, ListingClient};
use tracing::debug;

/// Lists clusters through the EMR `ListClusters` API.
#[derive(Clone, Debug)]
pub struct EmrListingClient {
    client: aws_sdk_emr::Client,
}

impl EmrListingClient {
    /// Creates a client for the given region, with credentials and
    /// endpoints resolved from the environment.
    pub async fn new(region: String) -> Self {
        let config = aws_config::from_env()
            .region(Region::new(region))
            .load()
            .await;

        Self {
            client: aws_sdk_emr::Client::new(&config),
        }
    }

    /// Wraps an already-configured SDK client.
    #[must_use]
    pub const fn from_client(client: aws_sdk_emr::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ListingClient for EmrListingClient {
    type Error = Error;

    async fn list_clusters(
        &self,
        states: &[ClusterState],
        marker: Option<&str>,
    ) -> Result<ClusterPage> {
        let mut request = self.client.list_clusters().set_cluster_states(Some(
            states.iter().copied().map(to_emr_state).collect(),
        ));

        // The service rejects an explicit empty cursor; only attach one
        // when continuing a listing.
        if let Some(marker) = marker {
            request = request.marker(marker);
        }

        let response = request.send().await.map_err(|e| Error::Emr(e.into()))?;

        let clusters = response
            .clusters
            .unwrap_or_default()
            .into_iter()
            .map(convert_summary)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            clusters = clusters.len(),
            has_next = response.marker.is_some(),
            "listed clusters"
        );

        Ok(ClusterPage {
            clusters,
            marker: response.marker,
        })
    }
}

fn to_emr_state(state: ClusterState) -> emr::ClusterState {
    match state {
        ClusterState::Starting => emr::ClusterState::Starting,
        ClusterState::Bootstrapping => emr::ClusterState::Bootstrapping,
        ClusterState::Waiting => emr::ClusterState::Waiting,
        ClusterState::Running => emr::ClusterState::Running,
        ClusterState::Terminating => emr::ClusterState::Terminating,
        ClusterState::Terminated => emr::ClusterState::Terminated,
        ClusterState::TerminatedWithErrors => emr::ClusterState::TerminatedWithErrors,
    }
}

fn from_emr_state(state: &emr::ClusterState) -> Result<ClusterState> {
    match state {
        emr::ClusterState::Starting => Ok(ClusterState::Starting),
        emr::ClusterState::Bootstrapping => Ok(ClusterState::Bootstrapping),
        emr::ClusterState::Waiting => Ok(ClusterState::Waiting),
        emr::ClusterState::Running => Ok(ClusterState::Running),
        emr::ClusterState::Terminating => Ok(ClusterState::Terminating),
        emr::ClusterState::Terminated => Ok(ClusterState::Terminated),
        emr::ClusterState::TerminatedWithErrors => Ok(ClusterState::TerminatedWithErrors),
        other => Err(Error::UnrecognizedState(other.as_str().to_owned())),
    }
}

fn convert_summary(summary: emr::ClusterSummary) -> Result<ClusterSummary> {
    let state = summary
        .status
        .and_then(|status| status.state)
        .ok_or(Error::MissingDetails)?;

    Ok(ClusterSummary {
        id: ClusterId::new(summary.id.ok_or(Error::MissingDetails)?),
        name: summary.name.ok_or(Error::MissingDetails)?,
        state: from_emr_state(&state)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [ClusterState; 7] = [
        ClusterState::Starting,
        ClusterState::Bootstrapping,
        ClusterState::Waiting,
        ClusterState::Running,
        ClusterState::Terminating,
        ClusterState::Terminated,
        ClusterState::TerminatedWithErrors,
    ];

    #[test]
    fn test_state_mapping_round_trips() {
        for state in ALL_STATES {
            assert_eq!(from_emr_state(&to_emr_state(state)).unwrap(), state);
        }
    }

    #[test]
    fn test_state_wire_names_agree_with_the_sdk() {
        for state in ALL_STATES {
            assert_eq!(to_emr_state(state).as_str(), state.as_str());
        }
    }

    #[test]
    fn test_convert_summary() {
        let summary = emr::ClusterSummary::builder()
            .id("j-2AXXXXXXGAPLF")
            .name("prod-cluster")
            .status(
                emr::ClusterStatus::builder()
                    .state(emr::ClusterState::Waiting)
                    .build(),
            )
            .build();

        let converted = convert_summary(summary).unwrap();

        assert_eq!(converted.id.as_str(), "j-2AXXXXXXGAPLF");
        assert_eq!(converted.name, "prod-cluster");
        assert_eq!(converted.state, ClusterState::Waiting);
    }

    #[test]
    fn test_convert_summary_without_status() {
        let summary = emr::ClusterSummary::builder()
            .id("j-2AXXXXXXGAPLF")
            .name("prod-cluster")
            .build();

        assert!(matches!(
            convert_summary(summary),
            Err(Error::MissingDetails)
        ));
    }

    #[test]
    fn test_convert_summary_without_name() {
        let summary = emr::ClusterSummary::builder()
            .id("j-2AXXXXXXGAPLF")
            .status(
                emr::ClusterStatus::builder()
                    .state(emr::ClusterState::Waiting)
                    .build(),
            )
            .build();

        assert!(matches!(
            convert_summary(summary),
            Err(Error::MissingDetails)
        ));
    }
}
