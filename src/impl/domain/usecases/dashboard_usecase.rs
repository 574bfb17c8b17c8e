use crate::{
    domain::logic::dashboard_metrics::DashboardProcessor,
    entities::{CostDashboardSummary, Dashboards, PlDashboardSummary},
    presentation::dashboard_printer::DashboardPrinter,
};

/// Read-only access to the cost and P&L dashboards and their derived figures.
#[derive(Debug, Clone)]
pub struct DashboardUsecase {
    dashboards: Dashboards,
}

impl DashboardUsecase {
    pub fn new(dashboards: Dashboards) -> Self {
        Self { dashboards }
    }

    pub fn dashboards(&self) -> &Dashboards {
        &self.dashboards
    }

    pub fn cost_summary(&self) -> CostDashboardSummary {
        DashboardProcessor::new().cost_summary(&self.dashboards.cost)
    }

    pub fn pl_summary(&self) -> PlDashboardSummary {
        DashboardProcessor::new().pl_summary(&self.dashboards.pl)
    }

    pub fn cost_report(&self) -> String {
        DashboardPrinter::new().print_cost(&self.dashboards.cost, &self.cost_summary())
    }

    pub fn pl_report(&self) -> String {
        DashboardPrinter::new().print_pl(&self.dashboards.pl, &self.pl_summary())
    }
}
