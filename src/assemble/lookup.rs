//! Cuisine lookup table
//!
//! Built once from the secondary source before record assembly and
//! immutable afterward. Resolves cuisine ids to display names during
//! the assembly join.

use std::collections::HashMap;

use super::errors::{AssembleResult, FormatError, SourceKind};
use super::Row;

const ID_COLUMN: &str = "id";
const NAME_COLUMN: &str = "name";

/// Mapping from cuisine id to cuisine name.
#[derive(Debug, Clone, Default)]
pub struct CuisineTable {
    by_id: HashMap<String, String>,
}

impl CuisineTable {
    /// Builds the table from already-parsed lookup rows.
    ///
    /// Fails with a `FormatError` naming the cuisines source if any row
    /// lacks the `id` or `name` column. A later duplicate id overwrites
    /// an earlier one.
    pub fn from_rows(rows: &[Row]) -> AssembleResult<Self> {
        let mut by_id = HashMap::new();

        for (index, row) in rows.iter().enumerate() {
            let data_row = index + 1;
            let id = row.get(ID_COLUMN).ok_or_else(|| {
                FormatError::missing_column(SourceKind::Cuisines, data_row, ID_COLUMN)
            })?;
            let name = row.get(NAME_COLUMN).ok_or_else(|| {
                FormatError::missing_column(SourceKind::Cuisines, data_row, NAME_COLUMN)
            })?;

            by_id.insert(id.clone(), name.clone());
        }

        Ok(Self { by_id })
    }

    /// Resolves a cuisine id to its name.
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    /// Returns the number of known cuisines.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuisine_row(id: &str, name: &str) -> Row {
        let mut row = Row::new();
        row.insert("id".to_string(), id.to_string());
        row.insert("name".to_string(), name.to_string());
        row
    }

    #[test]
    fn test_resolves_known_ids() {
        let rows = vec![cuisine_row("1", "American"), cuisine_row("2", "Spanish")];
        let table = CuisineTable::from_rows(&rows).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("1"), Some("American"));
        assert_eq!(table.resolve("2"), Some("Spanish"));
        assert_eq!(table.resolve("3"), None);
    }

    #[test]
    fn test_missing_column_fails_naming_cuisines_source() {
        let mut partial = Row::new();
        partial.insert("id".to_string(), "1".to_string());

        let err = CuisineTable::from_rows(&[partial]).unwrap_err();
        assert_eq!(err.code(), "PLATE_MISSING_COLUMN");
        assert_eq!(err.source_kind(), SourceKind::Cuisines);
        assert_eq!(err.row(), 1);
    }

    #[test]
    fn test_empty_source_builds_empty_table() {
        let table = CuisineTable::from_rows(&[]).unwrap();
        assert!(table.is_empty());
    }
}
