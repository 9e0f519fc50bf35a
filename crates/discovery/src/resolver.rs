use steprunner_cluster::{ClusterId, ClusterState, ListingClient};
use tracing::debug;

use crate::error::{Error, Result};

/// States a cluster may be in to count as a discovery candidate.
///
/// Name uniqueness is only expected within this set; terminated clusters in
/// particular may reuse a name freely.
pub const CANDIDATE_STATES: [ClusterState; 2] = [ClusterState::Waiting, ClusterState::Running];

/// Resolves human-assigned cluster names to stable cluster ids.
#[derive(Clone, Debug)]
pub struct ClusterResolver<C>
where
    C: ListingClient,
{
    client: C,
}

impl<C> ClusterResolver<C>
where
    C: ListingClient,
{
    /// Creates a resolver over the given listing client.
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Resolves `name` to the id of a unique, usable cluster.
    ///
    /// Walks the paginated listing restricted to [`CANDIDATE_STATES`],
    /// matching names by exact, case-sensitive equality. Returns `Ok(None)`
    /// when no candidate cluster carries the name; that is a normal
    /// outcome, not an error. Each call performs a fresh walk from the
    /// first page, one request in flight at a time, and dropping the
    /// returned future between page fetches abandons the search cleanly.
    ///
    /// # Errors
    ///
    /// - [`Error::NotReady`] if the unique match is `RUNNING`: new steps
    ///   can only be submitted to a `WAITING` cluster.
    /// - [`Error::AmbiguousName`] if a single page holds two or more
    ///   matches.
    /// - [`Error::Listing`] for failures raised by the listing client,
    ///   propagated unchanged.
    pub async fn resolve(&self, name: &str) -> Result<Option<ClusterId>, C::Error> {
        // Marker chains the walk through the full listing.
        let mut marker: Option<String> = None;
        let mut resolved: Option<ClusterId> = None;

        loop {
            let page = self
                .client
                .list_clusters(&CANDIDATE_STATES, marker.as_deref())
                .await
                .map_err(Error::Listing)?;

            let matches: Vec<_> = page
                .clusters
                .iter()
                .filter(|cluster| cluster.name == name)
                .collect();

            debug!(
                name,
                page_size = page.clusters.len(),
                matches = matches.len(),
                has_next = page.marker.is_some(),
                "walked listing page"
            );

            match matches.as_slice() {
                [] => marker = page.marker,
                [cluster] => {
                    if cluster.state == ClusterState::Running {
                        return Err(Error::NotReady {
                            name: name.to_owned(),
                            state: cluster.state,
                        });
                    }
                    resolved = Some(cluster.id.clone());
                    // Termination is decided by the loop check, not here.
                    marker = page.marker;
                }
                many => {
                    return Err(Error::AmbiguousName {
                        name: name.to_owned(),
                        count: many.len(),
                    });
                }
            }

            if marker.is_none() || resolved.is_some() {
                break;
            }
        }

        debug!(name, found = resolved.is_some(), "discovery finished");

        Ok(resolved)
    }
}
