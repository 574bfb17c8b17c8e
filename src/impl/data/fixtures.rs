// Seed data the demo application starts from.

pub(crate) const REQUESTS_RON: &str = include_str!("fixtures/requests.ron");
pub(crate) const APPLICANT_HISTORY_CSV: &str = include_str!("fixtures/applicant_history.csv");
pub(crate) const APPROVER_HISTORY_CSV: &str = include_str!("fixtures/approver_history.csv");
pub(crate) const DASHBOARDS_RON: &str = include_str!("fixtures/dashboards.ron");
