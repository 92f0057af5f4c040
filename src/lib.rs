//! Fruitapp - a layered to-do data service
//!
//! This library implements the data layer of a to-do list application: a
//! cache-first repository coordinating a local store with a simulated
//! remote backend. Reads are served from the local store, mutations are
//! written locally and mirrored to the network in detached background jobs.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Local store and change streams
//! * [`network`] - Network data source abstraction and simulated backend
//! * [`repository`] - The repository coordinating both stores
//! * [`fruit`] - External fruit model and mappings
//! * [`stats`] - Active/completed statistics

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Common error types for the data layer
pub mod error;

/// External fruit model exposed to callers
pub mod fruit;

/// Logging setup
pub mod logger;

/// Network data source abstraction and simulated backend
pub mod network;

/// Repository coordinating the local store and the network
pub mod repository;

/// Statistics over fruit lists
pub mod stats;

/// Local storage layer for fruit records
pub mod storage;

pub use error::StoreError;
pub use fruit::Fruit;
pub use network::{FruitStatus, NetworkDataSource, NetworkFruit, SimulatedNetworkDataSource};
pub use repository::FruitRepository;
pub use storage::LocalStore;
