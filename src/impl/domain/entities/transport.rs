use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
    pub via: Option<String>,
    pub date: NaiveDate,
    /// Apply the commuter-pass deduction.
    pub deduct_commuter_pass: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareQuote {
    pub summary: String,
    pub fare: i64,
    pub after_deduction: i64,
}

/// One line of a monthly transport claim. Cells may be left blank while the
/// sheet is being filled in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportRow {
    pub date: Option<NaiveDate>,
    pub from: String,
    pub to: String,
    pub via: Option<String>,
    pub fare: Option<i64>,
    pub after_deduction: Option<i64>,
    pub note: String,
}
