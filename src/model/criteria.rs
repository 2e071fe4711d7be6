//! Search criteria
//!
//! A partially-specified filter intent. A `None` field imposes no
//! constraint on the matching record attribute; criteria are constructed
//! once per request and read-only during filtering.

use serde::{Deserialize, Serialize};

/// User-supplied filter constraints, all optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Prefix of one of the words in the restaurant name
    pub name: Option<String>,

    /// Maximum distance in miles
    pub max_distance: Option<f64>,

    /// Maximum average price in US dollars
    pub max_price: Option<f64>,

    /// Minimum customer rating in stars (1-5)
    pub min_rating: Option<u8>,

    /// Prefix of one of the words in a cuisine name
    pub cuisine: Option<String>,
}

impl SearchCriteria {
    /// All-wildcard criteria: every well-formed record matches.
    pub fn any() -> Self {
        Self::default()
    }

    /// Sets the restaurant name prefix.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the maximum distance in miles.
    pub fn with_max_distance(mut self, miles: f64) -> Self {
        self.max_distance = Some(miles);
        self
    }

    /// Sets the maximum average price in US dollars.
    pub fn with_max_price(mut self, dollars: f64) -> Self {
        self.max_price = Some(dollars);
        self
    }

    /// Sets the minimum customer rating in stars.
    pub fn with_min_rating(mut self, stars: u8) -> Self {
        self.min_rating = Some(stars);
        self
    }

    /// Sets the cuisine name prefix.
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }
}
