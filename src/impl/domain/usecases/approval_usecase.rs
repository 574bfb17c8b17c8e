use tracing::{debug, info};

use crate::{
    domain::logic::{record_filter::RecordFilter, status_transition::StatusTransition},
    entities::{
        ApproverView, BulkSelection, CategoryFilter, InboxNavigation, RecordQuery, Request,
        RequestId, RequestStatus,
    },
    presentation::request_printer::RequestPrinter,
};

/// The approver's working state: the live request store plus everything the
/// inbox screen keeps between interactions (filter, bulk selection, list /
/// detail navigation, draft comment).
#[derive(Debug, Clone)]
pub struct ApprovalDesk {
    requests: Vec<Request>,
    query: RecordQuery,
    selection: BulkSelection,
    navigation: InboxNavigation,
    comment: String,
}

impl ApprovalDesk {
    /// The first request starts out as the selected one.
    pub fn new(requests: Vec<Request>) -> Self {
        let initially_selected = requests.first().map(|r| r.id.clone());
        Self {
            requests,
            query: RecordQuery::default(),
            selection: BulkSelection::new(),
            navigation: InboxNavigation::new(initially_selected),
            comment: String::new(),
        }
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn request(&self, id: &RequestId) -> Option<&Request> {
        self.requests.iter().find(|r| &r.id == id)
    }

    // Filter.
    // ---

    pub fn query(&self) -> &RecordQuery {
        &self.query
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    /// Requests matching the current filter, in store order.
    pub fn inbox(&self) -> Vec<&Request> {
        RecordFilter::new(&self.query).apply(&self.requests)
    }

    pub fn inbox_lines(&self) -> Vec<String> {
        let printer = RequestPrinter::new();
        self.inbox()
            .into_iter()
            .map(|r| printer.print_inbox_line(r, self.selection.contains(&r.id)))
            .collect()
    }

    // Bulk decisions.
    // ---

    pub fn selection(&self) -> &BulkSelection {
        &self.selection
    }

    pub fn toggle_selection(&mut self, id: &RequestId) -> bool {
        self.selection.toggle(id)
    }

    /// Approves every selected request, visible or not. Returns how many
    /// requests were rewritten. The selection is cleared afterwards.
    pub fn bulk_approve(&mut self) -> usize {
        self.apply_bulk(RequestStatus::Approved)
    }

    /// Rejects every selected request, visible or not. Returns how many
    /// requests were rewritten. The selection is cleared afterwards.
    pub fn bulk_reject(&mut self) -> usize {
        self.apply_bulk(RequestStatus::Rejected)
    }

    fn apply_bulk(&mut self, target: RequestStatus) -> usize {
        let changed =
            StatusTransition::new(target).apply_to_selection(&mut self.requests, &self.selection);
        info!(
            status = target.label(),
            selected = self.selection.len(),
            changed,
            "applied bulk decision"
        );
        self.selection.clear();
        changed
    }

    // Single request.
    // ---

    pub fn view(&self) -> ApproverView {
        self.navigation.view()
    }

    pub fn open_detail(&mut self, id: RequestId) {
        debug!(%id, "opening request detail");
        self.navigation.open(id);
    }

    pub fn back_to_list(&mut self) {
        self.navigation.back();
    }

    /// Re-enters the detail view of the last opened request.
    pub fn reopen_detail(&mut self) -> bool {
        self.navigation.reopen()
    }

    pub fn selected_id(&self) -> Option<&RequestId> {
        self.navigation.selected()
    }

    /// The request the detail view shows. Falls back to the first request if
    /// the selected id is not in the store.
    pub fn selected_request(&self) -> Option<&Request> {
        self.navigation
            .selected()
            .and_then(|id| self.request(id))
            .or_else(|| self.requests.first())
    }

    pub fn selected_detail(&self) -> Option<String> {
        self.selected_request()
            .map(|r| RequestPrinter::new().print_detail(r, &self.comment))
    }

    pub fn approve_selected(&mut self) -> bool {
        self.decide_selected(RequestStatus::Approved)
    }

    pub fn reject_selected(&mut self) -> bool {
        self.decide_selected(RequestStatus::Rejected)
    }

    fn decide_selected(&mut self, target: RequestStatus) -> bool {
        let Some(id) = self.navigation.selected().cloned() else {
            return false;
        };
        let applied = StatusTransition::new(target).apply_to_one(&mut self.requests, &id);
        info!(%id, status = target.label(), applied, "applied decision");
        applied
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::Category, test_support::request};

    fn desk() -> ApprovalDesk {
        ApprovalDesk::new(vec![
            request("REQ-1", Category::Invoice, "仕入先A 10月分 請求書"),
            request("REQ-2", Category::TransportClaim, "営業交通費"),
            request("REQ-3", Category::ExpenseClaim, "文具購入"),
        ])
    }

    fn id(s: &str) -> RequestId {
        RequestId::from(s)
    }

    #[test]
    fn bulk_applies_to_requests_hidden_by_filter() {
        let mut desk = desk();
        desk.toggle_selection(&id("REQ-1"));
        desk.toggle_selection(&id("REQ-2"));
        desk.set_category_filter(CategoryFilter::Only(Category::Invoice));
        assert_eq!(desk.inbox().len(), 1);

        assert_eq!(desk.bulk_approve(), 2);

        assert_eq!(desk.request(&id("REQ-1")).unwrap().status, RequestStatus::Approved);
        assert_eq!(desk.request(&id("REQ-2")).unwrap().status, RequestStatus::Approved);
        assert_eq!(desk.request(&id("REQ-3")).unwrap().status, RequestStatus::Pending);
    }

    #[test]
    fn selection_survives_filtering_and_clears_after_bulk() {
        let mut desk = desk();
        desk.toggle_selection(&id("REQ-3"));
        desk.set_query_text("請求書");
        assert!(desk.selection().contains(&id("REQ-3")));

        assert_eq!(desk.bulk_reject(), 1);
        assert!(desk.selection().is_empty());
        assert_eq!(desk.request(&id("REQ-3")).unwrap().status, RequestStatus::Rejected);
    }

    #[test]
    fn single_decision_uses_opened_request() {
        let mut desk = desk();
        desk.open_detail(id("REQ-2"));
        assert!(desk.reject_selected());
        assert_eq!(desk.request(&id("REQ-2")).unwrap().status, RequestStatus::Rejected);
        assert_eq!(desk.request(&id("REQ-1")).unwrap().status, RequestStatus::Pending);
    }

    #[test]
    fn back_then_reopen_keeps_selection() {
        let mut desk = desk();
        desk.open_detail(id("REQ-3"));
        desk.back_to_list();
        assert_eq!(desk.view(), ApproverView::List);
        assert!(desk.reopen_detail());
        assert_eq!(desk.view(), ApproverView::Detail);
        assert_eq!(desk.selected_request().unwrap().id, id("REQ-3"));
    }

    #[test]
    fn unknown_selection_falls_back_to_first_request() {
        let mut desk = desk();
        desk.open_detail(id("missing"));
        assert_eq!(desk.selected_request().unwrap().id, id("REQ-1"));
        assert!(!desk.approve_selected());
        assert!(desk.requests().iter().all(|r| r.status == RequestStatus::Pending));
    }

    #[test]
    fn first_request_is_initially_selected() {
        let desk = desk();
        assert_eq!(desk.view(), ApproverView::List);
        assert_eq!(desk.selected_id(), Some(&id("REQ-1")));
    }

    #[test]
    fn inbox_lines_mark_selected_rows() {
        let mut desk = desk();
        desk.toggle_selection(&id("REQ-2"));
        let lines = desk.inbox_lines();
        assert!(lines[0].starts_with("[ ]"));
        assert!(lines[1].starts_with("[x]"));
    }
}
