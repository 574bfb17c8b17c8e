use crate::{
    domain::logic::record_filter::RecordFilter,
    entities::{CategoryFilter, Filterable, RecordQuery},
};

/// Filterable view over one of the static history tables.
#[derive(Debug, Clone)]
pub struct HistoryBrowser<T: Filterable> {
    entries: Vec<T>,
    query: RecordQuery,
}

impl<T: Filterable> HistoryBrowser<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self {
            entries,
            query: RecordQuery::default(),
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn query(&self) -> &RecordQuery {
        &self.query
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    pub fn visible(&self) -> Vec<&T> {
        RecordFilter::new(&self.query).apply(&self.entries)
    }
}
