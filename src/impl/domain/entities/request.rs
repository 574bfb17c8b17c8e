use std::fmt;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::errors::ConfidenceOutOfRange;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId(s.to_string())
    }
}

/// Fixed business categories a request (or history entry) can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
pub enum Category {
    Invoice,
    ExpenseClaim,
    TransportClaim,
    PurchaseApproval,
    TripRequest,
    TripExpenseClaim,
}

impl Category {
    /// All categories, in the order they are offered to applicants.
    pub const ALL: [Category; 6] = [
        Category::Invoice,
        Category::ExpenseClaim,
        Category::TransportClaim,
        Category::PurchaseApproval,
        Category::TripRequest,
        Category::TripExpenseClaim,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Invoice => "請求書",
            Category::ExpenseClaim => "経費精算",
            Category::TransportClaim => "交通費精算",
            Category::PurchaseApproval => "稟議・購買",
            Category::TripRequest => "出張申請",
            Category::TripExpenseClaim => "出張旅費精算",
        }
    }

    /// Looks up a category by its display label or its variant name.
    pub fn from_label(s: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s || format!("{:?}", c) == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "待ち",
            RequestStatus::Approved => "承認",
            RequestStatus::Rejected => "却下",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The other party of a request. Requests without one (ex. transport claims)
/// carry the "—" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Counterparty {
    Named(String),
    None,
}

impl Counterparty {
    pub const SENTINEL: &'static str = "—";

    pub fn name(&self) -> Option<&str> {
        match self {
            Counterparty::Named(name) => Some(name),
            Counterparty::None => None,
        }
    }
}

impl From<String> for Counterparty {
    fn from(s: String) -> Self {
        if s.is_empty() || s == Counterparty::SENTINEL {
            Counterparty::None
        } else {
            Counterparty::Named(s)
        }
    }
}

impl fmt::Display for Counterparty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(Counterparty::SENTINEL))
    }
}

/// Free-form who/what/when/where/why/how description of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBrief {
    pub who_name: String,
    pub who_department: String,
    pub what: String,
    pub when: NaiveDate,
    pub where_to: String,
    pub why: String,
    pub how: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Deserialize)]
pub enum AttachmentKind {
    Pdf,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub kind: AttachmentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "低",
            RiskLevel::Medium => "中",
            RiskLevel::High => "高",
        }
    }
}

/// Scalar in [0, 1]. Range is enforced when requests are loaded.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(pub(crate) f64);

impl Confidence {
    pub fn new(value: f64) -> Result<Self, ServerError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfidenceOutOfRange::new(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rounded whole percentage (ex. 0.92 -> 92).
    pub fn percent(&self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub description: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: RequestId,
    pub category: Category,
    pub title: String,
    pub counterparty: Counterparty,
    /// Whole currency units.
    pub amount: i64,
    pub currency: Currency,
    pub status: RequestStatus,
    pub brief: RequestBrief,
    pub attachments: Vec<Attachment>,
    pub risk: RiskLevel,
    pub confidence: Confidence,
    pub checklist: Vec<ChecklistItem>,
    pub received_date: NaiveDate,
    pub urgent: bool,
}

impl Request {
    pub fn checklist_passed(&self) -> bool {
        self.checklist.iter().all(|item| item.passed)
    }
}
