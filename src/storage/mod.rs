//! Local storage module for fruit records.
//!
//! This module provides the durable, observable keyed store backing the
//! repository:
//! - Keyed CRUD over the `fruit` table (SeaORM on sqlite)
//! - Bulk replace and filtered deletes
//! - Infinite, restartable change streams for subscribers

pub mod db;
pub mod fruits;

pub use db::LocalStore;
