/// Ordered rows of scalar cells, ready to be encoded and saved under
/// `filename`. The first row is the header when one is included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub filename: String,
    pub rows: Vec<Vec<String>>,
}

impl CsvDocument {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_header<I, S>(filename: impl Into<String>, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut document = Self::new(filename);
        document.push_row(header);
        document
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }
}
