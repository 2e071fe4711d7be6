//! Ranking and selection
//!
//! Deterministic three-key sort plus top-N truncation.

use std::cmp::Ordering;

use crate::model::Restaurant;

/// Number of records the production pipeline returns.
pub const DEFAULT_LIMIT: usize = 5;

/// Sorts and truncates restaurant result sets.
pub struct RestaurantSorter;

impl RestaurantSorter {
    /// Sorts records by distance ascending, then rating descending,
    /// then price ascending.
    ///
    /// Records tied on all three keys have no guaranteed relative
    /// order. The stable sort used here happens to preserve input order
    /// for such ties; that is an artifact, not a contract.
    pub fn sort(records: &mut [Restaurant]) {
        records.sort_by(Self::compare);
    }

    /// Sorts the records and truncates to the first `limit`.
    ///
    /// Fewer than `limit` records are returned whole, fully sorted. An
    /// empty input yields an empty output, never an error.
    pub fn select_top(mut records: Vec<Restaurant>, limit: usize) -> Vec<Restaurant> {
        Self::sort(&mut records);
        records.truncate(limit);
        records
    }

    fn compare(a: &Restaurant, b: &Restaurant) -> Ordering {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| b.rating.cmp(&a.rating))
            .then_with(|| a.price.total_cmp(&b.price))
    }
}
