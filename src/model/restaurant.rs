//! Restaurant record type
//!
//! A `Restaurant` is produced by joining a primary row with the cuisine
//! lookup table. Records are immutable once assembled and compared
//! structurally.

use serde::{Deserialize, Serialize};

/// A fully-resolved restaurant record.
///
/// Every field is populated at assembly time; a record with an
/// unresolved cuisine reference is never constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Restaurant name
    pub name: String,

    /// Customer rating in stars (1-5)
    pub rating: u8,

    /// Distance in miles
    pub distance: f64,

    /// Average price in US dollars
    pub price: f64,

    /// Resolved cuisine name (not the lookup id)
    pub cuisine: String,
}

impl Restaurant {
    /// Creates a record with all fields populated.
    pub fn new(
        name: impl Into<String>,
        rating: u8,
        distance: f64,
        price: f64,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rating,
            distance,
            price,
            cuisine: cuisine.into(),
        }
    }

    /// Returns the full-field content key used for deduplication.
    ///
    /// Two records with identical field values produce equal identities.
    /// Float fields are keyed bit-exactly, so the identity is hashable
    /// without relying on float equality semantics.
    pub fn identity(&self) -> RestaurantIdentity {
        RestaurantIdentity {
            name: self.name.clone(),
            rating: self.rating,
            distance_bits: self.distance.to_bits(),
            price_bits: self.price.to_bits(),
            cuisine: self.cuisine.clone(),
        }
    }
}

/// Content identity of a `Restaurant`, usable as a hash-set key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestaurantIdentity {
    name: String,
    rating: u8,
    distance_bits: u64,
    price_bits: u64,
    cuisine: String,
}
