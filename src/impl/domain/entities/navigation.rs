use super::request::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApproverView {
    #[default]
    List,
    Detail,
}

/// List/detail state of the approver inbox. The last selected id is kept
/// across `back()`, so the detail can be re-entered without selecting again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboxNavigation {
    view: ApproverView,
    selected: Option<RequestId>,
}

impl InboxNavigation {
    pub fn new(initially_selected: Option<RequestId>) -> Self {
        Self {
            view: ApproverView::List,
            selected: initially_selected,
        }
    }

    pub fn view(&self) -> ApproverView {
        self.view
    }

    pub fn selected(&self) -> Option<&RequestId> {
        self.selected.as_ref()
    }

    pub fn open(&mut self, id: RequestId) {
        self.selected = Some(id);
        self.view = ApproverView::Detail;
    }

    pub fn back(&mut self) {
        self.view = ApproverView::List;
    }

    /// Returns to the detail view of the last selected request. No-op (and
    /// returns false) if nothing was ever selected.
    pub fn reopen(&mut self) -> bool {
        if self.selected.is_some() {
            self.view = ApproverView::Detail;
            true
        } else {
            false
        }
    }
}
