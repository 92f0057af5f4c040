//! External fruit model exposed to the layers above the data layer.
//!
//! Three model types exist for one fruit:
//!
//! * [`Fruit`] - external model, obtained from a local record via `From`.
//! * [`crate::entities::fruit::Model`] - local record stored in the database.
//! * [`crate::network::NetworkFruit`] - wire shape used by the network data
//!   source, with a status enum instead of the completed flag.
//!
//! All conversions are lossless; external↔network goes through the local
//! shape so the completed↔status encoding lives in one place.

use serde::{Deserialize, Serialize};

use crate::entities::fruit;

/// Immutable model for a single fruit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub is_completed: bool,
}

impl Fruit {
    pub fn is_active(&self) -> bool {
        !self.is_completed
    }

    /// A fruit with a blank title, description or category is considered
    /// empty. Callers validate this before saving; the stores do not.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() || self.description.is_empty() || self.category.is_empty()
    }

    /// Title shown in list views, falling back to the description.
    pub fn title_for_list(&self) -> &str {
        if self.title.is_empty() {
            &self.description
        } else {
            &self.title
        }
    }
}

// External to local
impl From<Fruit> for fruit::Model {
    fn from(value: Fruit) -> Self {
        fruit::Model {
            id: value.id,
            title: value.title,
            description: value.description,
            category: value.category,
            is_completed: value.is_completed,
        }
    }
}

// Local to external
impl From<fruit::Model> for Fruit {
    fn from(record: fruit::Model) -> Self {
        Fruit {
            id: record.id,
            title: record.title,
            description: record.description,
            category: record.category,
            is_completed: record.is_completed,
        }
    }
}
