use csv::{QuoteStyle, Terminator, WriterBuilder};
use fractic_server_error::ServerError;

use crate::{entities::CsvDocument, errors::CsvEncodingFailed};

/// Every cell quoted with internal quotes doubled, cells joined by ',', rows
/// joined by '\n'. No trailing newline, no BOM.
pub(crate) struct CsvEncoder;

impl CsvEncoder {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn encode(&self, document: &CsvDocument) -> Result<String, ServerError> {
        let lines = document
            .rows
            .iter()
            .map(|row| self.encode_row(row, &document.filename))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    fn encode_row(&self, row: &[String], filename: &str) -> Result<String, ServerError> {
        if row.is_empty() {
            return Ok(String::new());
        }
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer
            .write_record(row)
            .map_err(|e| CsvEncodingFailed::with_debug(filename, &e))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| CsvEncodingFailed::with_debug(filename, &e.to_string()))?;
        let mut line =
            String::from_utf8(bytes).map_err(|e| CsvEncodingFailed::with_debug(filename, &e))?;
        if line.ends_with('\n') {
            line.pop();
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn document(rows: Vec<Vec<&str>>) -> CsvDocument {
        let mut d = CsvDocument::new("test.csv");
        for row in rows {
            d.push_row(row);
        }
        d
    }

    fn parse(s: &str) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(s.as_bytes())
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn quotes_every_cell_and_doubles_inner_quotes() {
        let encoded = CsvEncoder::new()
            .encode(&document(vec![vec!["ID", "件名"], vec!["X1", "a\"b"]]))
            .unwrap();
        assert_eq!(encoded, "\"ID\",\"件名\"\n\"X1\",\"a\"\"b\"");
    }

    #[test]
    fn empty_document_encodes_to_empty_string() {
        assert_eq!(CsvEncoder::new().encode(&document(vec![])).unwrap(), "");
    }

    #[test]
    fn empty_cells_are_quoted() {
        let encoded = CsvEncoder::new()
            .encode(&document(vec![vec!["", "x"]]))
            .unwrap();
        assert_eq!(encoded, "\"\",\"x\"");
    }

    #[test]
    fn embedded_quote_round_trips() {
        let rows = vec![vec!["a\"b".to_string(), "c,d".to_string()]];
        let mut d = CsvDocument::new("x.csv");
        d.rows = rows.clone();
        let encoded = CsvEncoder::new().encode(&d).unwrap();
        assert_eq!(parse(&encoded), rows);
    }

    proptest! {
        #[test]
        fn encoded_rows_parse_back(
            rows in prop::collection::vec(
                prop::collection::vec("[a-z\",\n 円]{0,6}", 1..5),
                0..6,
            )
        ) {
            let mut d = CsvDocument::new("p.csv");
            d.rows = rows.clone();
            let encoded = CsvEncoder::new().encode(&d).unwrap();
            prop_assert_eq!(parse(&encoded), rows);
        }
    }
}
