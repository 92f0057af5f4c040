//! Network data source abstraction.
//!
//! This module defines the interface the repository uses to talk to a
//! backend, along with the wire-shaped fruit model. The only implementation
//! in this crate is [`SimulatedNetworkDataSource`], which models a real
//! service with fixed latency and a wholesale-overwrite save.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::fruit;
use crate::error::StoreError;
use crate::fruit::Fruit;

pub mod simulated;

pub use simulated::SimulatedNetworkDataSource;

/// Completion status of a fruit on the wire.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FruitStatus {
    #[default]
    Active,
    Complete,
}

/// Wire representation of a fruit.
///
/// Structurally equivalent to the local record, but `description` narrows to
/// a short description and the completed flag becomes [`FruitStatus`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFruit {
    pub id: String,
    pub title: String,
    pub category: String,
    pub short_description: String,
    pub status: FruitStatus,
}

/// Interface to a remote fruit backend.
///
/// `save_fruits` replaces the remote contents wholesale; there is no
/// incremental update on this seam.
#[async_trait]
pub trait NetworkDataSource: Send + Sync {
    async fn load_fruits(&self) -> Result<Vec<NetworkFruit>, StoreError>;

    async fn save_fruits(&self, fruits: Vec<NetworkFruit>) -> Result<(), StoreError>;
}

// Local to network
impl From<fruit::Model> for NetworkFruit {
    fn from(record: fruit::Model) -> Self {
        NetworkFruit {
            id: record.id,
            title: record.title,
            category: record.category,
            short_description: record.description,
            status: if record.is_completed {
                FruitStatus::Complete
            } else {
                FruitStatus::Active
            },
        }
    }
}

// Network to local
impl From<NetworkFruit> for fruit::Model {
    fn from(value: NetworkFruit) -> Self {
        fruit::Model {
            id: value.id,
            title: value.title,
            description: value.short_description,
            category: value.category,
            is_completed: value.status == FruitStatus::Complete,
        }
    }
}

// External to network, through the local shape
impl From<Fruit> for NetworkFruit {
    fn from(value: Fruit) -> Self {
        fruit::Model::from(value).into()
    }
}

// Network to external, through the local shape
impl From<NetworkFruit> for Fruit {
    fn from(value: NetworkFruit) -> Self {
        fruit::Model::from(value).into()
    }
}
