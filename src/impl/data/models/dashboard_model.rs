use crate::entities::{
    BreakdownItem, CostDashboard, Dashboards, MonthlySalesProfit, MonthlyTotal, PeriodComparison,
    PlDashboard,
};

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct BreakdownItemModel {
    name: String,
    total: i64,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct CostKpiModel {
    current_month_total: i64,
    prev_month_total: i64,
    alerts: u32,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct MonthlyTotalModel {
    name: String,
    total: i64,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct CostDashboardModel {
    kpi: CostKpiModel,
    monthly_trend: Vec<MonthlyTotalModel>,
    by_account: Vec<BreakdownItemModel>,
    by_dept: Vec<BreakdownItemModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct PlKpiModel {
    sales_current: i64,
    sales_prev: i64,
    profit_current: i64,
    profit_prev: i64,
    cost_current: i64,
    cost_prev: i64,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct MonthlySalesProfitModel {
    name: String,
    sales: i64,
    profit: i64,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct PlDashboardModel {
    kpi: PlKpiModel,
    monthly_trend: Vec<MonthlySalesProfitModel>,
    cost_breakdown: Vec<BreakdownItemModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct DashboardsModel {
    cost: CostDashboardModel,
    pl: PlDashboardModel,
}

impl Into<BreakdownItem> for BreakdownItemModel {
    fn into(self) -> BreakdownItem {
        BreakdownItem {
            name: self.name,
            total: self.total,
        }
    }
}

impl Into<Dashboards> for DashboardsModel {
    fn into(self) -> Dashboards {
        let cost = self.cost;
        let pl = self.pl;
        Dashboards {
            cost: CostDashboard {
                month_total: PeriodComparison {
                    current: cost.kpi.current_month_total,
                    previous: cost.kpi.prev_month_total,
                },
                alerts: cost.kpi.alerts,
                monthly_trend: cost
                    .monthly_trend
                    .into_iter()
                    .map(|m| MonthlyTotal {
                        month: m.name,
                        total: m.total,
                    })
                    .collect(),
                by_account: cost.by_account.into_iter().map(Into::into).collect(),
                by_department: cost.by_dept.into_iter().map(Into::into).collect(),
            },
            pl: PlDashboard {
                sales: PeriodComparison {
                    current: pl.kpi.sales_current,
                    previous: pl.kpi.sales_prev,
                },
                profit: PeriodComparison {
                    current: pl.kpi.profit_current,
                    previous: pl.kpi.profit_prev,
                },
                cost: PeriodComparison {
                    current: pl.kpi.cost_current,
                    previous: pl.kpi.cost_prev,
                },
                monthly_trend: pl
                    .monthly_trend
                    .into_iter()
                    .map(|m| MonthlySalesProfit {
                        month: m.name,
                        sales: m.sales,
                        profit: m.profit,
                    })
                    .collect(),
                cost_breakdown: pl.cost_breakdown.into_iter().map(Into::into).collect(),
            },
        }
    }
}
