/// A figure for the current period alongside the same figure for the
/// previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodComparison {
    pub current: i64,
    pub previous: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySalesProfit {
    pub month: String,
    pub sales: i64,
    pub profit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownItem {
    pub name: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostDashboard {
    pub month_total: PeriodComparison,
    pub alerts: u32,
    pub monthly_trend: Vec<MonthlyTotal>,
    pub by_account: Vec<BreakdownItem>,
    pub by_department: Vec<BreakdownItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlDashboard {
    pub sales: PeriodComparison,
    pub profit: PeriodComparison,
    /// Cost of sales plus SG&A.
    pub cost: PeriodComparison,
    pub monthly_trend: Vec<MonthlySalesProfit>,
    pub cost_breakdown: Vec<BreakdownItem>,
}

// Derived figures.
// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Whether a change is good news. Revenue and profit going up is favourable;
/// for costs the sense is reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Favorable,
    Unfavorable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodChange {
    pub difference: i64,
    /// `None` when the previous period is zero.
    pub percent: Option<f64>,
    pub trend: Trend,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownShare {
    pub name: String,
    pub total: i64,
    pub percent: f64,
    /// Pie segment bounds, in degrees, clockwise from 0.
    pub start_angle: f64,
    pub end_angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarHeight {
    pub month: String,
    /// Share of the trend maximum, in [0, 1].
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostDashboardSummary {
    pub month_total: PeriodChange,
    pub alerts: u32,
    pub trend_max: i64,
    pub trend_bars: Vec<BarHeight>,
    pub account_total: i64,
    pub by_account: Vec<BreakdownShare>,
    pub department_total: i64,
    pub by_department: Vec<BreakdownShare>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlDashboardSummary {
    pub sales: PeriodChange,
    pub profit: PeriodChange,
    pub cost: PeriodChange,
    pub sales_max: i64,
    pub sales_bars: Vec<BarHeight>,
    pub cost_total: i64,
    pub cost_breakdown: Vec<BreakdownShare>,
}
