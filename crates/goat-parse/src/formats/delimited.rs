use csv::ReaderBuilder;
use serde_json::Map;

use crate::{ParseError, Parser, Value};

/// Parses delimiter-separated tables with the `csv` crate.
///
/// The first row is the header. Each following row becomes a mapping from
/// header to cell, and the document is the sequence of those rows. Cells
/// are always strings; rows whose field count differs from the header are
/// rejected.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedParser {
    format: &'static str,
    delimiter: u8,
}

impl DelimitedParser {
    /// Comma-separated values.
    pub fn csv() -> Self {
        Self {
            format: "csv",
            delimiter: b',',
        }
    }

    /// Tab-separated values.
    pub fn tsv() -> Self {
        Self {
            format: "tsv",
            delimiter: b'\t',
        }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl Parser for DelimitedParser {
    fn parse(&self, raw: &str) -> Result<Value, ParseError> {
        let malformed = |e: csv::Error| ParseError::malformed(self.format, e);

        let mut rdr = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(raw.as_bytes());

        let headers = rdr.headers().map_err(malformed)?.clone();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(malformed)?;
            let row: Map<String, Value> = headers
                .iter()
                .zip(record.iter())
                .map(|(h, cell)| (h.to_string(), Value::String(cell.to_string())))
                .collect();
            rows.push(Value::Object(row));
        }
        Ok(Value::Array(rows))
    }
}
