//! Latest-known outage snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::InaccessibleStations;

use super::client::OutageClient;
use super::error::OutageError;

/// The set together with when it was last filled.
struct Latest {
    stations: Arc<InaccessibleStations>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Thread-safe holder for the most recent inaccessible-station set.
///
/// Readers get a cheap `Arc` clone of the current snapshot; a background
/// task replaces it wholesale on each successful poll.
#[derive(Clone)]
pub struct OutageSnapshot {
    inner: Arc<RwLock<Latest>>,
    client: OutageClient,
}

impl OutageSnapshot {
    /// Create a snapshot by fetching the feed once.
    ///
    /// This will fail if the feed is unreachable.
    pub async fn fetch(client: OutageClient) -> Result<Self, OutageError> {
        let stations = client.fetch_inaccessible().await?;

        Ok(Self {
            inner: Arc::new(RwLock::new(Latest {
                stations: Arc::new(stations),
                refreshed_at: Some(Utc::now()),
            })),
            client,
        })
    }

    /// Create an empty snapshot, to be filled by a later `refresh`.
    pub fn empty(client: OutageClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Latest {
                stations: Arc::new(InaccessibleStations::new()),
                refreshed_at: None,
            })),
            client,
        }
    }

    /// The current set of inaccessible stations.
    pub async fn current(&self) -> Arc<InaccessibleStations> {
        let guard = self.inner.read().await;
        Arc::clone(&guard.stations)
    }

    /// When the snapshot was last replaced, or `None` if it never was.
    pub async fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.refreshed_at
    }

    /// Replace the snapshot outright.
    pub async fn replace(&self, stations: InaccessibleStations) -> usize {
        let count = stations.len();
        let mut guard = self.inner.write().await;
        *guard = Latest {
            stations: Arc::new(stations),
            refreshed_at: Some(Utc::now()),
        };
        count
    }

    /// Re-poll the feed.
    ///
    /// On success, replaces the current snapshot. On failure, the existing
    /// snapshot is preserved and the error is returned.
    pub async fn refresh(&self) -> Result<usize, OutageError> {
        let stations = self.client.fetch_inaccessible().await?;
        Ok(self.replace(stations).await)
    }
}
