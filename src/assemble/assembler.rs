//! Record assembly
//!
//! Joins primary rows with the cuisine lookup table into `Restaurant`
//! records. Assembly is strict:
//! - every required column must be present
//! - rating must parse as an integer, distance and price as floats
//! - the cuisine id must resolve through the lookup table
//! - the first malformed row aborts the whole source
//!
//! Matching records are deduplicated by full-field content identity
//! before being retained, and non-matching records are dropped here so
//! they never reach ranking.

use std::collections::HashSet;
use std::str::FromStr;

use crate::matcher::Predicate;
use crate::model::{Restaurant, RestaurantIdentity, SearchCriteria};

use super::errors::{AssembleResult, FormatError, SourceKind};
use super::lookup::CuisineTable;
use super::Row;

const NAME_COLUMN: &str = "name";
const RATING_COLUMN: &str = "customer_rating";
const DISTANCE_COLUMN: &str = "distance";
const PRICE_COLUMN: &str = "price";
const CUISINE_ID_COLUMN: &str = "cuisine_id";

/// Assembles restaurant records from already-parsed rows.
pub struct RecordAssembler<'a> {
    cuisines: &'a CuisineTable,
}

impl<'a> RecordAssembler<'a> {
    /// Creates an assembler backed by the given cuisine table.
    pub fn new(cuisines: &'a CuisineTable) -> Self {
        Self { cuisines }
    }

    /// Assembles every row into a deduplicated record set.
    pub fn assemble(&self, rows: &[Row]) -> AssembleResult<Vec<Restaurant>> {
        // And([]) is vacuously true, so nothing is filtered out
        self.assemble_where(rows, &Predicate::And(Vec::new()), &SearchCriteria::any())
    }

    /// Assembles rows, retaining only records the predicate accepts.
    ///
    /// Duplicate records (full field equality) collapse to one. Retained
    /// records keep first-seen order.
    pub fn assemble_where(
        &self,
        rows: &[Row],
        predicate: &Predicate,
        criteria: &SearchCriteria,
    ) -> AssembleResult<Vec<Restaurant>> {
        let mut seen: HashSet<RestaurantIdentity> = HashSet::new();
        let mut records = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let record = self.assemble_row(row, index + 1)?;

            if !predicate.satisfied_by(&record, criteria) {
                continue;
            }
            if seen.insert(record.identity()) {
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Parses one primary row into a fully-populated record.
    fn assemble_row(&self, row: &Row, data_row: usize) -> AssembleResult<Restaurant> {
        let name = require(row, data_row, NAME_COLUMN)?;
        let rating: u8 = parse_number(row, data_row, RATING_COLUMN)?;
        let distance: f64 = parse_number(row, data_row, DISTANCE_COLUMN)?;
        let price: f64 = parse_number(row, data_row, PRICE_COLUMN)?;

        let cuisine_id = require(row, data_row, CUISINE_ID_COLUMN)?;
        let cuisine = self
            .cuisines
            .resolve(cuisine_id)
            .ok_or_else(|| FormatError::unknown_cuisine(data_row, cuisine_id))?;

        Ok(Restaurant::new(name, rating, distance, price, cuisine))
    }
}

/// Fetches a required column from a primary row.
fn require<'r>(row: &'r Row, data_row: usize, column: &'static str) -> AssembleResult<&'r str> {
    row.get(column)
        .map(String::as_str)
        .ok_or_else(|| FormatError::missing_column(SourceKind::Restaurants, data_row, column))
}

/// Fetches and parses a required numeric column.
fn parse_number<T: FromStr>(row: &Row, data_row: usize, column: &'static str) -> AssembleResult<T> {
    let raw = require(row, data_row, column)?;
    raw.trim()
        .parse()
        .map_err(|_| FormatError::invalid_number(SourceKind::Restaurants, data_row, column, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuisine_table() -> CuisineTable {
        let rows = vec![
            lookup_row("1", "American"),
            lookup_row("2", "Vietnamese"),
        ];
        CuisineTable::from_rows(&rows).unwrap()
    }

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

    #[test]
    fn test_assembles_valid_rows() {
        let table = cuisine_table();
        let assembler = RecordAssembler::new(&table);

        let rows = vec![restaurant_row("George's Grill", "4", "7", "20", "2")];
        let records = assembler.assemble(&rows).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "George's Grill");
        assert_eq!(records[0].rating, 4);
        assert_eq!(records[0].distance, 7.0);
        assert_eq!(records[0].price, 20.0);
        assert_eq!(records[0].cuisine, "Vietnamese");
    }

    #[test]
    fn test_non_numeric_rating_fails() {
        let table = cuisine_table();
        let assembler = RecordAssembler::new(&table);

        let rows = vec![restaurant_row("Bad Row", "abc", "7", "20", "1")];
        let err = assembler.assemble(&rows).unwrap_err();

        assert_eq!(err.code(), "PLATE_INVALID_NUMBER");
        assert_eq!(err.source_kind(), SourceKind::Restaurants);
        assert_eq!(err.row(), 1);
    }

    #[test]
    fn test_unknown_cuisine_id_fails() {
        let table = cuisine_table();
        let assembler = RecordAssembler::new(&table);

        let rows = vec![restaurant_row("Mystery Meat", "3", "2", "15", "99")];
        let err = assembler.assemble(&rows).unwrap_err();

        assert_eq!(err.code(), "PLATE_UNKNOWN_CUISINE");
        assert_eq!(err.source_kind(), SourceKind::Restaurants);
    }

    #[test]
    fn test_missing_column_fails() {
        let table = cuisine_table();
        let assembler = RecordAssembler::new(&table);

        let mut row = restaurant_row("No Price", "3", "2", "15", "1");
        row.remove("price");

        let err = assembler.assemble(&[row]).unwrap_err();
        assert_eq!(err.code(), "PLATE_MISSING_COLUMN");
    }

    #[test]
    fn test_one_bad_row_aborts_the_source() {
        let table = cuisine_table();
        let assembler = RecordAssembler::new(&table);

        let rows = vec![
            restaurant_row("Fine", "4", "1", "10", "1"),
            restaurant_row("Broken", "4", "near", "10", "1"),
        ];

        // No partial output: the good first row is discarded too
        let err = assembler.assemble(&rows).unwrap_err();
        assert_eq!(err.row(), 2);
    }

    #[test]
    fn test_duplicate_rows_collapse() {
        let table = cuisine_table();
        let assembler = RecordAssembler::new(&table);

        let rows = vec![
            restaurant_row("Twin", "4", "1", "10", "1"),
            restaurant_row("Twin", "4", "1", "10", "1"),
        ];

        let records = assembler.assemble(&rows).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_predicate_filters_before_retention() {
        let table = cuisine_table();
        let assembler = RecordAssembler::new(&table);

        let rows = vec![
            restaurant_row("Near", "4", "1", "10", "1"),
            restaurant_row("Far", "4", "20", "10", "1"),
        ];
        let criteria = SearchCriteria::any().with_max_distance(5.0);

        let records = assembler
            .assemble_where(&rows, &Predicate::matching_all(), &criteria)
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Near");
    }

    #[test]
    fn test_numeric_fields_tolerate_surrounding_whitespace() {
        let table = cuisine_table();
        let assembler = RecordAssembler::new(&table);

        let rows = vec![restaurant_row("Padded", " 4 ", " 7.5", "20 ", "1")];
        let records = assembler.assemble(&rows).unwrap();

        assert_eq!(records[0].rating, 4);
        assert_eq!(records[0].distance, 7.5);
    }
}
