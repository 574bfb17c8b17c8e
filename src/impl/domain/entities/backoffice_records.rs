use super::{
    dashboard::{CostDashboard, PlDashboard},
    history::{ApplicantHistoryEntry, ApproverHistoryEntry},
    request::Request,
};

/// Everything the application is seeded with at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct BackofficeRecords {
    pub requests: Vec<Request>,
    pub applicant_history: Vec<ApplicantHistoryEntry>,
    pub approver_history: Vec<ApproverHistoryEntry>,
    pub dashboards: Dashboards,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboards {
    pub cost: CostDashboard,
    pub pl: PlDashboard,
}
