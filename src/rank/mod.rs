//! Ranking subsystem
//!
//! Orders matched records by (distance asc, rating desc, price asc) and
//! truncates to a fixed result size.

mod sorter;

pub use sorter::{RestaurantSorter, DEFAULT_LIMIT};
