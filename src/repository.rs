//! Fruit repository, the single entry point for fruit data.
//!
//! The repository mediates between the local store and the network data
//! source with a cache-first policy: reads are served from the local store,
//! and only a forced read pulls from the network. Every mutation writes to
//! the local store synchronously, then mirrors the full local contents to
//! the network in a detached background job.
//!
//! The mirroring is one-way and keeps no ordering between jobs: if two
//! mutations run in quick succession, the last job to read the local
//! snapshot and write it to the network wins. A `refresh()` racing a
//! pending mirror job can likewise drop a not-yet-mirrored local write.
//! Both are accepted properties of the simple overwrite design, not bugs
//! this module tries to hide.

use std::sync::{Arc, Mutex};

use log::{debug, info};
use tokio::task::JoinSet;
use tokio_stream::{Stream, StreamExt};
use uuid::Uuid;

use crate::error::StoreError;
use crate::fruit::Fruit;
use crate::network::{NetworkDataSource, NetworkFruit};
use crate::storage::LocalStore;

/// Coordinates the local store and the network data source.
///
/// The repository owns its collaborators explicitly; there are no ambient
/// singletons. Background mirror jobs run inside a [`JoinSet`] owned by the
/// repository, so dropping it aborts any job still in flight.
pub struct FruitRepository {
    local: Arc<LocalStore>,
    network: Arc<dyn NetworkDataSource>,
    mirror_jobs: Mutex<JoinSet<()>>,
}

impl FruitRepository {
    pub fn new(local: Arc<LocalStore>, network: Arc<dyn NetworkDataSource>) -> Self {
        Self {
            local,
            network,
            mirror_jobs: Mutex::new(JoinSet::new()),
        }
    }

    /// Create a fruit and return its freshly assigned id.
    ///
    /// Id generation happens before any store access, outside every lock.
    /// The fruit is written to the local store synchronously and mirrored to
    /// the network in the background.
    pub async fn create_fruit(
        &self,
        title: &str,
        category: &str,
        description: &str,
    ) -> Result<String, StoreError> {
        let fruit_id = Uuid::new_v4().to_string();
        let fruit = Fruit {
            id: fruit_id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            is_completed: false,
        };
        self.local.upsert(fruit.into()).await?;
        self.save_fruits_to_network();
        Ok(fruit_id)
    }

    /// Update the editable fields of a fruit, leaving its completed flag
    /// untouched.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when no fruit has the given id.
    pub async fn update_fruit(
        &self,
        fruit_id: &str,
        title: &str,
        category: &str,
        description: &str,
    ) -> Result<(), StoreError> {
        let mut fruit = self
            .get_fruit(fruit_id, false)
            .await?
            .ok_or_else(|| StoreError::NotFound(fruit_id.to_string()))?;
        fruit.title = title.to_string();
        fruit.category = category.to_string();
        fruit.description = description.to_string();

        self.local.upsert(fruit.into()).await?;
        self.save_fruits_to_network();
        Ok(())
    }

    /// Get all fruits.
    ///
    /// With `force_update`, runs a blocking [`refresh`](Self::refresh)
    /// first; otherwise the read is served from the local store. Once data
    /// exists locally, non-forced reads never touch the network.
    pub async fn get_fruits(&self, force_update: bool) -> Result<Vec<Fruit>, StoreError> {
        if force_update {
            self.refresh().await?;
        }
        Ok(self.local.get_all().await?.into_iter().map(Fruit::from).collect())
    }

    /// Get a fruit by id, or `None` if it cannot be found.
    pub async fn get_fruit(&self, fruit_id: &str, force_update: bool) -> Result<Option<Fruit>, StoreError> {
        if force_update {
            self.refresh().await?;
        }
        Ok(self.local.get_by_id(fruit_id).await?.map(Fruit::from))
    }

    /// Get all fruits in a category, from the local store.
    pub async fn get_fruits_by_category(&self, category: &str) -> Result<Vec<Fruit>, StoreError> {
        Ok(self
            .local
            .get_by_category(category)
            .await?
            .into_iter()
            .map(Fruit::from)
            .collect())
    }

    /// Observe all fruits. Infinite; yields the current list immediately,
    /// then again after every local change.
    pub fn observe_fruits(&self) -> impl Stream<Item = Vec<Fruit>> {
        self.local
            .observe_all()
            .map(|records| records.into_iter().map(Fruit::from).collect())
    }

    /// Observe one fruit by id; yields `None` while the id is absent.
    pub fn observe_fruit(&self, fruit_id: &str) -> impl Stream<Item = Option<Fruit>> {
        self.local.observe_by_id(fruit_id).map(|record| record.map(Fruit::from))
    }

    /// Observe all fruits in a category.
    pub fn observe_fruits_by_category(&self, category: &str) -> impl Stream<Item = Vec<Fruit>> {
        let category = category.to_string();
        self.local.observe_all().map(move |records| {
            records
                .into_iter()
                .filter(|record| record.category == category)
                .map(Fruit::from)
                .collect()
        })
    }

    /// Delete everything in the local store and replace it with the network
    /// contents.
    ///
    /// This is a full overwrite: a local write whose mirror job has not
    /// completed yet is lost if this runs first. Callers wait for the
    /// network round trip, unlike mutations, which return before their
    /// mirror job finishes.
    ///
    /// # Errors
    /// [`StoreError::Unavailable`] when either backing store is down.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        info!("🔄 Refreshing local store from network...");
        let remote_fruits = self.network.load_fruits().await?;
        info!("✅ Loaded {} fruits from network", remote_fruits.len());

        self.local.delete_all().await?;
        self.local
            .upsert_all(remote_fruits.into_iter().map(Into::into).collect())
            .await?;
        Ok(())
    }

    /// Refresh the store on behalf of a single fruit. The network data
    /// source has no per-id endpoint, so this is a full refresh.
    pub async fn refresh_fruit(&self, _fruit_id: &str) -> Result<(), StoreError> {
        self.refresh().await
    }

    /// Mark a fruit as completed. No-op when the id is absent.
    pub async fn complete_fruit(&self, fruit_id: &str) -> Result<(), StoreError> {
        self.local.update_completed(fruit_id, true).await?;
        self.save_fruits_to_network();
        Ok(())
    }

    /// Mark a fruit as active. No-op when the id is absent.
    pub async fn activate_fruit(&self, fruit_id: &str) -> Result<(), StoreError> {
        self.local.update_completed(fruit_id, false).await?;
        self.save_fruits_to_network();
        Ok(())
    }

    /// Delete all completed fruits, returning how many were removed.
    pub async fn clear_completed_fruits(&self) -> Result<u64, StoreError> {
        let deleted = self.local.delete_completed().await?;
        self.save_fruits_to_network();
        Ok(deleted)
    }

    /// Delete all fruits.
    pub async fn delete_all_fruits(&self) -> Result<(), StoreError> {
        self.local.delete_all().await?;
        self.save_fruits_to_network();
        Ok(())
    }

    /// Delete a fruit by id, returning the number deleted (0 or 1).
    pub async fn delete_fruit(&self, fruit_id: &str) -> Result<u64, StoreError> {
        let deleted = self.local.delete_by_id(fruit_id).await?;
        self.save_fruits_to_network();
        Ok(deleted)
    }

    /// Send the local contents to the network in a detached job.
    ///
    /// Returns immediately; the caller gets no success or failure signal.
    /// Failures inside the job are logged and discarded. Concurrent jobs
    /// are not ordered against each other: each one snapshots the local
    /// store and overwrites the network wholesale, so the last to finish
    /// wins.
    fn save_fruits_to_network(&self) {
        let local = Arc::clone(&self.local);
        let network = Arc::clone(&self.network);

        let Ok(mut jobs) = self.mirror_jobs.lock() else {
            return;
        };
        // Reap jobs that already finished so the set does not grow
        // unbounded across many mutations.
        while jobs.try_join_next().is_some() {}
        jobs.spawn(async move {
            let snapshot = match local.get_all().await {
                Ok(records) => records,
                Err(e) => {
                    debug!("mirror job could not read local store: {e}");
                    return;
                }
            };
            let payload: Vec<NetworkFruit> = snapshot.into_iter().map(Into::into).collect();
            if let Err(e) = network.save_fruits(payload).await {
                debug!("mirror job failed to save to network: {e}");
            }
        });
    }

    /// Wait for every mirror job launched so far to finish.
    ///
    /// Mutations never wait for their mirror job; this exists so shutdown
    /// paths and tests can drain the background work before inspecting the
    /// network side.
    pub async fn flush_mirror(&self) {
        let mut jobs = {
            let Ok(mut guard) = self.mirror_jobs.lock() else {
                return;
            };
            std::mem::take(&mut *guard)
        };
        while jobs.join_next().await.is_some() {}
    }
}
