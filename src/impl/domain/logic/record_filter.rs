use crate::entities::{Filterable, RecordQuery};

/// Narrows a record list down to the entries matching a query. Store order is
/// preserved and the result is recomputed on every call.
pub(crate) struct RecordFilter<'a> {
    query: &'a RecordQuery,
}

impl<'a> RecordFilter<'a> {
    pub(crate) fn new(query: &'a RecordQuery) -> Self {
        Self { query }
    }

    pub(crate) fn apply<'r, T: Filterable>(&self, records: &'r [T]) -> Vec<&'r T> {
        records.iter().filter(|r| self.query.matches(*r)).collect()
    }
}
