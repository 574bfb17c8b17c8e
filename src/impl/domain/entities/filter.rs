use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidCategory;

use super::{
    history::{ApplicantHistoryEntry, ApproverHistoryEntry},
    request::{Category, Request},
};

/// Anything that can be narrowed down by a `RecordQuery`.
pub trait Filterable {
    fn category(&self) -> Category;
    fn title(&self) -> &str;
}

impl Filterable for Request {
    fn category(&self) -> Category {
        self.category
    }
    fn title(&self) -> &str {
        &self.title
    }
}

impl Filterable for ApplicantHistoryEntry {
    fn category(&self) -> Category {
        self.category
    }
    fn title(&self) -> &str {
        &self.title
    }
}

impl Filterable for ApproverHistoryEntry {
    fn category(&self) -> Category {
        self.category
    }
    fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const WILDCARD_LABEL: &'static str = "すべて";

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::WILDCARD_LABEL,
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::WILDCARD_LABEL | "all" | "All" => Ok(CategoryFilter::All),
            _ => Category::from_label(s)
                .map(CategoryFilter::Only)
                .ok_or_else(|| InvalidCategory::new(s)),
        }
    }
}

/// Category predicate plus case-sensitive title substring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordQuery {
    pub category: CategoryFilter,
    pub text: String,
}

impl RecordQuery {
    pub fn new(category: CategoryFilter, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        let category_matches = match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => record.category() == c,
        };
        category_matches && (self.text.is_empty() || record.title().contains(&self.text))
    }
}
