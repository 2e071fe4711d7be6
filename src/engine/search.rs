//! Search pipeline
//!
//! The sole entry point the CLI layer calls. Execution flow (strict
//! order):
//!
//! 1. Build the cuisine lookup table from the secondary source
//! 2. Assemble primary rows, filtering each record through the composed
//!    predicate and collapsing duplicates; the first malformed row
//!    aborts the run
//! 3. Sort by (distance asc, rating desc, price asc)
//! 4. Truncate to the limit
//! 5. Return ordered results
//!
//! The pipeline performs no file I/O and holds no state between runs:
//! same criteria + same rows = same results.

use crate::assemble::{AssembleResult, CuisineTable, RecordAssembler, Row};
use crate::matcher::Predicate;
use crate::model::{Restaurant, SearchCriteria};
use crate::rank::{RestaurantSorter, DEFAULT_LIMIT};

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Matching records in rank order, at most `limit` of them
    pub restaurants: Vec<Restaurant>,
    /// Number of distinct records that matched before truncation
    pub matched_count: usize,
    /// Whether truncation discarded any matches
    pub limit_applied: bool,
}

impl SearchOutcome {
    /// Returns the number of records returned.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// True when no records matched.
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Iterates the returned records in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter()
    }
}

/// Orchestrates assembly, matching, and ranking.
///
/// The predicate tree is composed once, here, and reused across every
/// record of every run.
pub struct SearchPipeline {
    predicate: Predicate,
    limit: usize,
}

impl SearchPipeline {
    /// Creates the production pipeline: all five criteria predicates
    /// composed with AND, limit 5.
    pub fn new() -> Self {
        Self {
            predicate: Predicate::matching_all(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Overrides the truncation limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Replaces the composed predicate.
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// Runs the pipeline against in-memory row sources.
    ///
    /// A `FormatError` from either source propagates unchanged; there is
    /// no partial-success mode.
    pub fn run(
        &self,
        criteria: &SearchCriteria,
        restaurant_rows: &[Row],
        cuisine_rows: &[Row],
    ) -> AssembleResult<SearchOutcome> {
        let cuisines = CuisineTable::from_rows(cuisine_rows)?;
        let assembler = RecordAssembler::new(&cuisines);
        let matched = assembler.assemble_where(restaurant_rows, &self.predicate, criteria)?;

        let matched_count = matched.len();
        let restaurants = RestaurantSorter::select_top(matched, self.limit);
        let limit_applied = matched_count > restaurants.len();

        Ok(SearchOutcome {
            restaurants,
            matched_count,
            limit_applied,
        })
    }
}

impl Default for SearchPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_row(id: &str, name: &str) -> Row {
        let mut row = Row::new();
        row.insert("id".to_string(), id.to_string());
        row.insert("name".to_string(), name.to_string());
        row
    }

    fn restaurant_row(name: &str, rating: &str, distance: &str, price: &str, cuisine_id: &str) -> Row {
        let mut row = Row::new();
        row.insert("name".to_string(), name.to_string());
        row.insert("customer_rating".to_string(), rating.to_string());
        row.insert("distance".to_string(), distance.to_string());
        row.insert("price".to_string(), price.to_string());
        row.insert("cuisine_id".to_string(), cuisine_id.to_string());
        row
    }

    fn cuisine_rows() -> Vec<Row> {
        vec![lookup_row("1", "American"), lookup_row("2", "Vietnamese")]
    }

    #[test]
    fn test_run_filters_ranks_and_truncates() {
        let restaurants = vec![
            restaurant_row("Grill Up", "3", "7", "50", "1"),
            restaurant_row("George's Grill", "4", "7", "20", "2"),
            restaurant_row("Omalio's", "4", "6", "50", "1"),
        ];
        let criteria = SearchCriteria::any().with_name("grill");

        let outcome = SearchPipeline::new()
            .run(&criteria, &restaurants, &cuisine_rows())
            .unwrap();

        // Distance tie at 7, rating 4 beats 3
        assert_eq!(outcome.len(), 2);
        assert_eq!(outcome.restaurants[0].name, "George's Grill");
        assert_eq!(outcome.restaurants[1].name, "Grill Up");
        assert!(!outcome.limit_applied);
    }

    #[test]
    fn test_limit_applied_is_reported() {
        let restaurants: Vec<Row> = (0..7)
            .map(|i| restaurant_row(&format!("Diner {}", i), "3", &i.to_string(), "10", "1"))
            .collect();

        let outcome = SearchPipeline::new()
            .run(&SearchCriteria::any(), &restaurants, &cuisine_rows())
            .unwrap();

        assert_eq!(outcome.len(), 5);
        assert_eq!(outcome.matched_count, 7);
        assert!(outcome.limit_applied);
    }

    #[test]
    fn test_empty_primary_source_is_not_an_error() {
        let outcome = SearchPipeline::new()
            .run(&SearchCriteria::any(), &[], &cuisine_rows())
            .unwrap();

        assert!(outcome.is_empty());
        assert_eq!(outcome.matched_count, 0);
        assert!(!outcome.limit_applied);
    }

    #[test]
    fn test_format_error_propagates_unchanged() {
        let restaurants = vec![restaurant_row("Bad", "abc", "1", "10", "1")];

        let err = SearchPipeline::new()
            .run(&SearchCriteria::any(), &restaurants, &cuisine_rows())
            .unwrap_err();

        assert_eq!(err.code(), "PLATE_INVALID_NUMBER");
    }

    #[test]
    fn test_custom_predicate_composition() {
        // Everything NOT matching the name prefix
        let pipeline = SearchPipeline::new()
            .with_predicate(Predicate::negate(Predicate::NameMatches))
            .with_limit(10);

        let restaurants = vec![
            restaurant_row("Grill Up", "3", "7", "50", "1"),
            restaurant_row("Omalio's", "4", "6", "50", "1"),
        ];
        let criteria = SearchCriteria::any().with_name("grill");

        let outcome = pipeline
            .run(&criteria, &restaurants, &cuisine_rows())
            .unwrap();

        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.restaurants[0].name, "Omalio's");
    }
}
