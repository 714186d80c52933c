//! Reading the product CSV into an ordered set of rows
//!
//! The export is produced by a Japanese spreadsheet application, so the raw
//! bytes are decoded with a legacy encoding (Shift_JIS by default) before
//! being handed to the CSV parser.

use std::collections::HashMap;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::Encoding;
use log::debug;

use super::error::{DatasetError, GroupError};

/// Encoding label used when none is configured
pub const DEFAULT_ENCODING: &str = "shift_jis";

/// One data row of the CSV, keyed by header name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based position of the row among the data rows (header excluded)
    pub number: usize,
    values: HashMap<String, String>,
}

impl Row {
    pub fn new(number: usize, values: HashMap<String, String>) -> Self {
        Self { number, values }
    }

    /// Build a row from `(column, value)` pairs
    #[cfg(test)]
    pub fn from_pairs<K, V>(number: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { number, values }
    }

    /// Raw cell text, `None` when the column does not exist
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Cell text, treating an empty cell the same as a missing column
    pub fn value(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    /// Cell text for a column that must exist on this row
    pub fn require(&self, column: &str) -> Result<&str, GroupError> {
        self.get(column).ok_or_else(|| GroupError::MissingField {
            column: column.to_string(),
        })
    }
}

/// Ordered rows of one uploaded file
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Header names in file order
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Read and decode a CSV file from disk
    pub fn from_path(path: &Path, encoding: &str) -> Result<Self, DatasetError> {
        let bytes = std::fs::read(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Self::from_bytes(&bytes, encoding)
    }

    /// Decode raw bytes with the encoding named by `encoding` and parse them
    ///
    /// Any byte sequence that is invalid in the chosen encoding rejects the
    /// whole file; nothing is replaced or recovered.
    pub fn from_bytes(bytes: &[u8], encoding: &str) -> Result<Self, DatasetError> {
        let decoder = Encoding::for_label(encoding.trim().as_bytes())
            .ok_or_else(|| DatasetError::UnknownEncoding(encoding.to_string()))?;

        let (text, had_errors) = decoder.decode_with_bom_removal(bytes);
        if had_errors {
            return Err(DatasetError::MalformedEncoding {
                encoding: decoder.name().to_string(),
            });
        }

        Self::from_csv_str(&text)
    }

    /// Parse already-decoded CSV text; the first record is the header
    ///
    /// A row shorter than the header is accepted and its trailing cells are
    /// left out, so they read as absent. A row longer than the header is an
    /// error.
    pub fn from_csv_str(text: &str) -> Result<Self, DatasetError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(DatasetError::TooManyFields {
                    row: index + 1,
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            let mut values = HashMap::with_capacity(headers.len());
            for (header, cell) in headers.iter().zip(record.iter()) {
                values
                    .entry(header.clone())
                    .or_insert_with(|| cell.to_string());
            }
            rows.push(Row::new(index + 1, values));
        }

        debug!("Parsed {} rows with {} columns", rows.len(), headers.len());
        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows, for previewing an upload
    pub fn head(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Handle,Title,Sサイズ肩幅\nTSHIRT-RED,Red Tee,40\nTSHIRT-RED,Red Tee,\n";

    #[test]
    fn test_parse_rows_in_order() {
        let dataset = Dataset::from_csv_str(SAMPLE).unwrap();
        assert_eq!(dataset.headers, vec!["Handle", "Title", "Sサイズ肩幅"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows[0].number, 1);
        assert_eq!(dataset.rows[1].number, 2);
        assert_eq!(dataset.rows[0].get("Sサイズ肩幅"), Some("40"));
    }

    #[test]
    fn test_empty_cell_vs_missing_column() {
        let dataset = Dataset::from_csv_str(SAMPLE).unwrap();
        let row = &dataset.rows[1];

        assert_eq!(row.get("Sサイズ肩幅"), Some(""));
        assert_eq!(row.value("Sサイズ肩幅"), None);
        assert_eq!(row.get("Mサイズ肩幅"), None);
        assert_eq!(
            row.require("Vendor"),
            Err(GroupError::MissingField {
                column: "Vendor".to_string()
            })
        );
    }

    #[test]
    fn test_decode_shift_jis() {
        let (bytes, _, had_errors) = encoding_rs::SHIFT_JIS.encode(SAMPLE);
        assert!(!had_errors);

        let dataset = Dataset::from_bytes(&bytes, DEFAULT_ENCODING).unwrap();
        assert_eq!(dataset.headers[2], "Sサイズ肩幅");
        assert_eq!(dataset.rows[0].get("Title"), Some("Red Tee"));
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(SAMPLE.as_bytes());

        let dataset = Dataset::from_bytes(&bytes, "utf-8").unwrap();
        assert_eq!(dataset.headers[0], "Handle");
    }

    #[test]
    fn test_malformed_bytes_rejected() {
        // 0x81 is a Shift_JIS lead byte that needs a valid trail byte
        let bytes = b"Handle,Title\nA,\x81\x20\n";
        let result = Dataset::from_bytes(bytes, DEFAULT_ENCODING);
        assert!(matches!(
            result,
            Err(DatasetError::MalformedEncoding { .. })
        ));
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let result = Dataset::from_bytes(SAMPLE.as_bytes(), "klingon");
        assert!(matches!(result, Err(DatasetError::UnknownEncoding(_))));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Dataset::from_csv_str("Handle,Title\nA,B\nA,B,C\n");
        assert!(matches!(
            result,
            Err(DatasetError::TooManyFields {
                row: 2,
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_short_row_cells_absent() {
        let dataset =
            Dataset::from_csv_str("Handle,Title,Sサイズ肩幅,Mサイズ肩幅\nA,T,40,42\nA,T,40\n")
                .unwrap();

        assert_eq!(dataset.len(), 2);
        let short = &dataset.rows[1];
        assert_eq!(short.get("Sサイズ肩幅"), Some("40"));
        assert_eq!(short.get("Mサイズ肩幅"), None);
        assert_eq!(short.value("Mサイズ肩幅"), None);
        assert_eq!(dataset.rows[0].get("Mサイズ肩幅"), Some("42"));
    }

    #[test]
    fn test_head() {
        let dataset = Dataset::from_csv_str(SAMPLE).unwrap();
        assert_eq!(dataset.head(1).len(), 1);
        assert_eq!(dataset.head(10).len(), 2);
    }
}
