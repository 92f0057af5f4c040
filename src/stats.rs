//! Active/completed statistics over a list of fruits.

use crate::fruit::Fruit;

/// Percentages of active and completed fruits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsResult {
    pub active_fruits_percent: f32,
    pub completed_fruits_percent: f32,
}

/// Compute the share of active and completed fruits.
///
/// An empty list yields zero for both, rather than dividing by zero.
pub fn active_and_completed_stats(fruits: &[Fruit]) -> StatsResult {
    if fruits.is_empty() {
        return StatsResult {
            active_fruits_percent: 0.0,
            completed_fruits_percent: 0.0,
        };
    }

    let total = fruits.len() as f32;
    let active = fruits.iter().filter(|fruit| fruit.is_active()).count() as f32;
    StatsResult {
        active_fruits_percent: 100.0 * active / total,
        completed_fruits_percent: 100.0 * (total - active) / total,
    }
}
