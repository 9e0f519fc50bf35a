//! A scripted implementation of the cluster listing client. Used for testing
//! pagination-driven discovery without a control plane.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::Error;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use steprunner_cluster::{ClusterPage, ClusterState, ClusterSummary, ListingClient};
use tokio::sync::Mutex;

/// One recorded `list_clusters` call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingRequest {
    /// The state filter the caller passed.
    pub states: Vec<ClusterState>,

    /// The continuation marker the caller passed.
    pub marker: Option<String>,
}

#[derive(Debug, Default)]
struct Inner {
    pages: HashMap<Option<String>, ClusterPage>,
    faults: HashSet<Option<String>>,
    requests: Vec<ListingRequest>,
}

/// A scripted listing client serving pre-registered pages.
///
/// Pages are keyed by the continuation marker a caller presents, `None`
/// being the first page. Every call is recorded so tests can assert how a
/// consumer walked the listing.
#[derive(Clone, Debug, Default)]
pub struct MockListingClient {
    inner: Arc<Mutex<Inner>>,
}

impl MockListingClient {
    /// Creates a mock with no pages registered. A first-page request
    /// returns an empty final page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock serving the given pages in order, chained through
    /// generated continuation markers (`page-1`, `page-2`, ...). The last
    /// page carries no marker.
    #[must_use]
    pub fn with_pages(pages: Vec<Vec<ClusterSummary>>) -> Self {
        let count = pages.len();
        let mut registry = HashMap::new();
        let mut key: Option<String> = None;

        for (index, clusters) in pages.into_iter().enumerate() {
            let marker = (index + 1 < count).then(|| format!("page-{}", index + 1));
            registry.insert(key.clone(), ClusterPage { clusters, marker: marker.clone() });
            key = marker;
        }

        Self {
            inner: Arc::new(Mutex::new(Inner {
                pages: registry,
                ..Inner::default()
            })),
        }
    }

    /// Registers `page` to be served for requests presenting `key` as
    /// their marker (`None` registers the first page).
    pub async fn insert_page(&self, key: Option<String>, page: ClusterPage) {
        self.inner.lock().await.pages.insert(key, page);
    }

    /// Scripts the request for `key` to fail with [`Error::Fault`].
    pub async fn fail_for(&self, key: Option<String>) {
        self.inner.lock().await.faults.insert(key);
    }

    /// All requests observed so far, oldest first.
    pub async fn requests(&self) -> Vec<ListingRequest> {
        self.inner.lock().await.requests.clone()
    }

    /// Number of requests observed so far.
    pub async fn request_count(&self) -> usize {
        self.inner.lock().await.requests.len()
    }
}

#[async_trait]
impl ListingClient for MockListingClient {
    type Error = Error;

    async fn list_clusters(
        &self,
        states: &[ClusterState],
        marker: Option<&str>,
    ) -> Result<ClusterPage, Self::Error> {
        let mut inner = self.inner.lock().await;
        let key = marker.map(ToOwned::to_owned);

        inner.requests.push(ListingRequest {
            states: states.to_vec(),
            marker: key.clone(),
        });

        if inner.faults.contains(&key) {
            return Err(Error::Fault);
        }

        match (inner.pages.get(&key), key) {
            (Some(page), _) => Ok(page.clone()),
            (None, None) => Ok(ClusterPage::default()),
            (None, Some(marker)) => Err(Error::UnknownMarker(marker)),
        }
    }
}
