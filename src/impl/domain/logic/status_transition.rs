use crate::entities::{BulkSelection, Request, RequestId, RequestStatus};

/// Rewrites request status in place. Applies to the whole store, never just
/// the filtered view.
pub(crate) struct StatusTransition {
    target: RequestStatus,
}

impl StatusTransition {
    pub(crate) fn new(target: RequestStatus) -> Self {
        Self { target }
    }

    /// Returns the number of requests whose id was selected.
    pub(crate) fn apply_to_selection(
        &self,
        requests: &mut [Request],
        selection: &BulkSelection,
    ) -> usize {
        let mut changed = 0;
        for r in requests.iter_mut().filter(|r| selection.contains(&r.id)) {
            r.status = self.target;
            changed += 1;
        }
        changed
    }

    /// Returns false if no request has the given id.
    pub(crate) fn apply_to_one(&self, requests: &mut [Request], id: &RequestId) -> bool {
        match requests.iter_mut().find(|r| &r.id == id) {
            Some(r) => {
                r.status = self.target;
                true
            }
            None => false,
        }
    }
}
