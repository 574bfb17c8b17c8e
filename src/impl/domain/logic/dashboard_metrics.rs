use crate::entities::{
    BarHeight, BreakdownItem, BreakdownShare, CostDashboard, CostDashboardSummary,
    PeriodChange, PeriodComparison, PlDashboard, PlDashboardSummary, Tone, Trend,
};

/// Whether an increase of the measured figure is good news.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

pub(crate) fn period_change(comparison: PeriodComparison, polarity: Polarity) -> PeriodChange {
    let difference = comparison.current - comparison.previous;
    let percent = match comparison.previous {
        0 => None,
        previous => Some(difference as f64 / previous as f64 * 100.0),
    };
    let trend = if difference >= 0 { Trend::Up } else { Trend::Down };
    let tone = match (trend, polarity) {
        (Trend::Up, Polarity::HigherIsBetter) | (Trend::Down, Polarity::LowerIsBetter) => {
            Tone::Favorable
        }
        _ => Tone::Unfavorable,
    };
    PeriodChange {
        difference,
        percent,
        trend,
        tone,
    }
}

/// Total of the breakdown, plus each item's share of it and its pie segment.
pub(crate) fn breakdown_shares(items: &[BreakdownItem]) -> (i64, Vec<BreakdownShare>) {
    let total: i64 = items.iter().map(|item| item.total).sum();
    let mut accumulated = 0.0;
    let shares = items
        .iter()
        .map(|item| {
            let percent = if total == 0 {
                0.0
            } else {
                item.total as f64 / total as f64 * 100.0
            };
            let start_angle = accumulated / 100.0 * 360.0;
            accumulated += percent;
            let end_angle = accumulated / 100.0 * 360.0;
            BreakdownShare {
                name: item.name.clone(),
                total: item.total,
                percent,
                start_angle,
                end_angle,
            }
        })
        .collect();
    (total, shares)
}

/// Largest monthly value (0 for an empty trend) and each month's bar height
/// relative to it.
pub(crate) fn trend_bars<'a, I>(months: I) -> (i64, Vec<BarHeight>)
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    let months: Vec<(&str, i64)> = months.into_iter().collect();
    let max = months.iter().map(|(_, v)| *v).max().unwrap_or(0).max(0);
    let bars = months
        .into_iter()
        .map(|(month, value)| BarHeight {
            month: month.to_string(),
            ratio: if max == 0 {
                0.0
            } else {
                value as f64 / max as f64
            },
        })
        .collect();
    (max, bars)
}

pub(crate) struct DashboardProcessor;

impl DashboardProcessor {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn cost_summary(&self, dashboard: &CostDashboard) -> CostDashboardSummary {
        let (trend_max, trend_bars) = trend_bars(
            dashboard
                .monthly_trend
                .iter()
                .map(|m| (m.month.as_str(), m.total)),
        );
        let (account_total, by_account) = breakdown_shares(&dashboard.by_account);
        let (department_total, by_department) = breakdown_shares(&dashboard.by_department);
        CostDashboardSummary {
            month_total: period_change(dashboard.month_total, Polarity::LowerIsBetter),
            alerts: dashboard.alerts,
            trend_max,
            trend_bars,
            account_total,
            by_account,
            department_total,
            by_department,
        }
    }

    pub(crate) fn pl_summary(&self, dashboard: &PlDashboard) -> PlDashboardSummary {
        let (sales_max, sales_bars) = trend_bars(
            dashboard
                .monthly_trend
                .iter()
                .map(|m| (m.month.as_str(), m.sales)),
        );
        let (cost_total, cost_breakdown) = breakdown_shares(&dashboard.cost_breakdown);
        PlDashboardSummary {
            sales: period_change(dashboard.sales, Polarity::HigherIsBetter),
            profit: period_change(dashboard.profit, Polarity::HigherIsBetter),
            cost: period_change(dashboard.cost, Polarity::LowerIsBetter),
            sales_max,
            sales_bars,
            cost_total,
            cost_breakdown,
        }
    }
}
