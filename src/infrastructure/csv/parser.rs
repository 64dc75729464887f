// ============================================================
// CSV PARSER
// ============================================================
// Parse raw CSV text into headers and positional rows

use crate::domain::dataset::{CellValue, DataRow};
use crate::domain::error::{AppError, Result};

/// Parsed CSV content: the header line plus one positional row per data
/// line, every row padded to the header width.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<DataRow>,
}

/// Line-oriented CSV parser.
///
/// Fields are split on the delimiter and trimmed; quoted fields containing
/// embedded delimiters are NOT handled — a quoted field is split like any
/// other text. This is a known limitation of the format this engine
/// accepts, kept deliberately rather than silently fixed.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: char,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse CSV content from a string.
    ///
    /// Empty and whitespace-only lines (including a trailing blank line)
    /// are discarded. The first remaining line is the header line. Data
    /// lines shorter than the header are padded with nulls; fields that
    /// are empty after trimming are stored as nulls; fields beyond the
    /// header width are dropped.
    pub fn parse(&self, text: &str) -> Result<ParsedCsv> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let header_line = lines
            .next()
            .ok_or_else(|| AppError::Parse("CSV input contains no header line".to_string()))?;

        let headers: Vec<String> = header_line
            .split(self.delimiter)
            .map(|field| field.trim().to_string())
            .collect();

        let rows: Vec<DataRow> = lines
            .map(|line| {
                let mut row = DataRow::new(
                    line.split(self.delimiter)
                        .take(headers.len())
                        .map(CellValue::from_field)
                        .collect(),
                );
                row.pad_to(headers.len());
                row
            })
            .collect();

        tracing::debug!(
            columns = headers.len(),
            rows = rows.len(),
            "parsed CSV content"
        );

        Ok(ParsedCsv { headers, rows })
    }
}

/// Decode raw file bytes into text: UTF-8 when valid, windows-1252
/// otherwise. Never fails; undecodable bytes are replaced.
pub fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let parsed = CsvParser::new().parse(content).unwrap();

        assert_eq!(parsed.headers, vec!["name", "age", "city"]);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0].cell(0), &CellValue::Text("Alice".to_string()));
        assert_eq!(parsed.rows[1].cell(2), &CellValue::Text("LA".to_string()));
    }

    #[test]
    fn test_blank_lines_discarded() {
        let content = "a,b\n\n1,2\n   \n3,4\n";
        let parsed = CsvParser::new().parse(content).unwrap();
        assert_eq!(parsed.rows.len(), 2);
    }

    #[test]
    fn test_short_rows_padded_with_null() {
        let content = "a,b,c\n1,2";
        let parsed = CsvParser::new().parse(content).unwrap();
        assert_eq!(parsed.rows[0].len(), 3);
        assert_eq!(parsed.rows[0].cell(2), &CellValue::Null);
    }

    #[test]
    fn test_empty_fields_become_null() {
        let content = "a,b,c\n1,,3";
        let parsed = CsvParser::new().parse(content).unwrap();
        assert_eq!(parsed.rows[0].cell(1), &CellValue::Null);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let content = " a , b \n 1 , x ";
        let parsed = CsvParser::new().parse(content).unwrap();
        assert_eq!(parsed.headers, vec!["a", "b"]);
        assert_eq!(parsed.rows[0].cell(1), &CellValue::Text("x".to_string()));
    }

    #[test]
    fn test_no_header_line_is_parse_error() {
        assert!(CsvParser::new().parse("").is_err());
        assert!(CsvParser::new().parse("\n   \n").is_err());
    }

    #[test]
    fn test_quoted_fields_are_not_special() {
        // Documented limitation: quotes do not protect embedded commas.
        let content = "a,b\nx,\"y,z\"";
        let parsed = CsvParser::new().parse(content).unwrap();
        assert_eq!(parsed.rows[0].cell(1), &CellValue::Text("\"y".to_string()));
    }

    #[test]
    fn test_custom_delimiter() {
        let content = "a;b\n1;2";
        let parsed = CsvParser::new().with_delimiter(';').parse(content).unwrap();
        assert_eq!(parsed.headers, vec!["a", "b"]);
    }

    #[test]
    fn test_decode_bytes() {
        assert_eq!(decode_bytes(b"plain"), "plain");
        // 0xE9 is "é" in windows-1252 but invalid as standalone UTF-8.
        assert_eq!(decode_bytes(b"caf\xE9"), "caf\u{e9}");
    }
}
