//! Simulated fruit backend with artificial latency.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{FruitStatus, NetworkDataSource, NetworkFruit};
use crate::error::StoreError;

/// In-process stand-in for a real backend service.
///
/// Holds a flat list of fruits behind a single mutex, so individual reads
/// and writes are atomic and at most one operation is in flight at a time.
/// Every operation sleeps for the configured latency while holding the
/// lock, which models a simple non-partitioned service under load.
///
/// An unset list (`None`) simulates an outage: loads fail with
/// [`StoreError::Unavailable`] until the next save restores the contents.
pub struct SimulatedNetworkDataSource {
    fruits: Mutex<Option<Vec<NetworkFruit>>>,
    latency: Duration,
}

impl SimulatedNetworkDataSource {
    /// Create a data source pre-populated with the default sample fruits.
    pub fn new(latency: Duration) -> Self {
        Self::with_fruits(latency, sample_fruits())
    }

    pub fn with_fruits(latency: Duration, fruits: Vec<NetworkFruit>) -> Self {
        Self {
            fruits: Mutex::new(Some(fruits)),
            latency,
        }
    }

    /// Create a data source in the outage state.
    pub fn unavailable(latency: Duration) -> Self {
        Self {
            fruits: Mutex::new(None),
            latency,
        }
    }

    /// Drop the backing list, failing subsequent loads.
    pub async fn set_unavailable(&self) {
        *self.fruits.lock().await = None;
    }
}

#[async_trait]
impl NetworkDataSource for SimulatedNetworkDataSource {
    async fn load_fruits(&self) -> Result<Vec<NetworkFruit>, StoreError> {
        let fruits = self.fruits.lock().await;
        tokio::time::sleep(self.latency).await;
        fruits
            .clone()
            .ok_or_else(|| StoreError::Unavailable("network fruit list is unset".to_string()))
    }

    async fn save_fruits(&self, new_fruits: Vec<NetworkFruit>) -> Result<(), StoreError> {
        let mut fruits = self.fruits.lock().await;
        tokio::time::sleep(self.latency).await;
        *fruits = Some(new_fruits);
        Ok(())
    }
}

fn sample_fruits() -> Vec<NetworkFruit> {
    vec![
        NetworkFruit {
            id: "PISA".to_string(),
            title: "Build tower in Pisa".to_string(),
            category: "verduras".to_string(),
            short_description: "Ground looks good, no foundation work required.".to_string(),
            status: FruitStatus::Active,
        },
        NetworkFruit {
            id: "TACOMA".to_string(),
            title: "Finish bridge in Tacoma".to_string(),
            category: "legumbres".to_string(),
            short_description: "Found awesome girders at half the cost!".to_string(),
            status: FruitStatus::Active,
        },
    ]
}
