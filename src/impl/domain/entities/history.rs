use std::fmt;

use chrono::NaiveDate;

use super::request::Category;

/// Past request as seen by the applicant. Static, not derived from the live
/// request store.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantHistoryEntry {
    pub id: String,
    pub category: Category,
    pub title: String,
    /// Missing in the source data is kept as `None` and shown as a
    /// placeholder.
    pub amount: Option<i64>,
    /// Free-form status label (ex. "承認→登録済").
    pub status: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalAction {
    Approved,
    Returned,
    Rejected,
}

impl ApprovalAction {
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalAction::Approved => "承認",
            ApprovalAction::Returned => "差戻",
            ApprovalAction::Rejected => "却下",
        }
    }

    pub fn from_label(s: &str) -> Option<ApprovalAction> {
        match s {
            "承認" | "Approved" => Some(ApprovalAction::Approved),
            "差戻" | "Returned" => Some(ApprovalAction::Returned),
            "却下" | "Rejected" => Some(ApprovalAction::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Past decision as seen by the approver. Static, not derived from the live
/// request store.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproverHistoryEntry {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub amount: Option<i64>,
    pub action: ApprovalAction,
    pub date: NaiveDate,
}
