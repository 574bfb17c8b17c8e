use std::collections::BTreeSet;

use super::request::RequestId;

/// Set of request ids picked for a bulk decision. Independent of whichever
/// filter is currently applied to the inbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSelection {
    ids: BTreeSet<RequestId>,
}

impl BulkSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &RequestId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &RequestId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &RequestId> {
        self.ids.iter()
    }
}

impl FromIterator<RequestId> for BulkSelection {
    fn from_iter<T: IntoIterator<Item = RequestId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
