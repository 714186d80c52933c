//! Grouping variant rows into products by handle

use std::collections::HashMap;

use super::columns;
use super::dataset::{Dataset, Row};
use super::error::DatasetError;

/// All rows sharing one handle, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup {
    handle: String,
    rows: Vec<Row>,
}

impl ProductGroup {
    /// Create a group from its first row; a group is never empty
    pub fn new(handle: impl Into<String>, first: Row) -> Self {
        Self {
            handle: handle.into(),
            rows: vec![first],
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// The first row of the group by original order.
    ///
    /// Product-level fields (title, vendor, tags, type) and the size
    /// measurements are taken from this row only.
    pub fn representative(&self) -> &Row {
        &self.rows[0]
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    fn push(&mut self, row: Row) {
        self.rows.push(row);
    }
}

/// Group rows by handle.
///
/// Groups come out in the order their handle first appears; rows keep
/// input order within each group. A row without a handle fails the whole
/// dataset.
pub fn group_rows(dataset: &Dataset) -> Result<Vec<ProductGroup>, DatasetError> {
    let mut groups: Vec<ProductGroup> = Vec::new();
    let mut index_by_handle: HashMap<String, usize> = HashMap::new();

    for row in &dataset.rows {
        let handle = row
            .value(columns::HANDLE)
            .ok_or_else(|| DatasetError::MissingIdentifier {
                row: row.number,
                column: columns::HANDLE.to_string(),
            })?;

        match index_by_handle.get(handle) {
            Some(&index) => groups[index].push(row.clone()),
            None => {
                index_by_handle.insert(handle.to_string(), groups.len());
                groups.push(ProductGroup::new(handle, row.clone()));
            }
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(handles: &[&str]) -> Dataset {
        let rows = handles
            .iter()
            .enumerate()
            .map(|(i, h)| Row::from_pairs(i + 1, [("Handle", *h), ("Title", "t")]))
            .collect();
        Dataset {
            headers: vec!["Handle".to_string(), "Title".to_string()],
            rows,
        }
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let data = dataset(&["B", "A", "B", "C", "A"]);
        let groups = group_rows(&data).unwrap();

        let handles: Vec<&str> = groups.iter().map(|g| g.handle()).collect();
        assert_eq!(handles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_rows_keep_input_order() {
        let data = dataset(&["B", "A", "B", "C", "A"]);
        let groups = group_rows(&data).unwrap();

        let numbers: Vec<usize> = groups[0].rows().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 3]);
        let numbers: Vec<usize> = groups[1].rows().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![2, 5]);
        assert_eq!(groups[2].len(), 1);
    }

    #[test]
    fn test_representative_is_first_row() {
        let data = dataset(&["A", "A", "A"]);
        let groups = group_rows(&data).unwrap();
        assert_eq!(groups[0].representative().number, 1);
    }

    #[test]
    fn test_missing_handle_fails_whole_dataset() {
        let data = dataset(&["A", "", "B"]);
        let err = group_rows(&data).unwrap_err();
        assert!(matches!(err, DatasetError::MissingIdentifier { row: 2, .. }));
    }

    #[test]
    fn test_missing_handle_column_fails() {
        let data = Dataset {
            headers: vec!["Title".to_string()],
            rows: vec![Row::from_pairs(1, [("Title", "t")])],
        };
        assert!(group_rows(&data).is_err());
    }

    #[test]
    fn test_empty_dataset_has_no_groups() {
        let groups = group_rows(&Dataset::default()).unwrap();
        assert!(groups.is_empty());
    }
}
