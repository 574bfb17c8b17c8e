use crate::entities::{
    BreakdownShare, CostDashboard, CostDashboardSummary, PeriodChange, PlDashboard,
    PlDashboardSummary, Tone,
};

use super::amount_fmt::{format_change, format_man_yen, format_yen};

pub(crate) struct DashboardPrinter;

impl DashboardPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_cost(
        &self,
        dashboard: &CostDashboard,
        summary: &CostDashboardSummary,
    ) -> String {
        let mut output = String::new();

        output.push_str(
            "; --- Cost dashboard -----------------------------------------------------------\n\n",
        );
        output.push_str(&format!(
            "今月の経費合計  {}  前月比: {}\n",
            format_yen(dashboard.month_total.current),
            self.change(&summary.month_total),
        ));
        output.push_str(&format!("要確認アラート  {} 件\n\n", summary.alerts));

        output.push_str("月次推移:\n");
        for (month, bar) in dashboard.monthly_trend.iter().zip(&summary.trend_bars) {
            output.push_str(&format!(
                "  {:>4} {:<20} {}\n",
                month.month,
                self.bar(bar.ratio),
                format_man_yen(month.total),
            ));
        }
        output.push('\n');

        output.push_str("勘定科目別:\n");
        self.print_shares(&mut output, &summary.by_account);
        output.push_str("部署別:\n");
        self.print_shares(&mut output, &summary.by_department);
        output
    }

    pub(crate) fn print_pl(&self, dashboard: &PlDashboard, summary: &PlDashboardSummary) -> String {
        let mut output = String::new();

        output.push_str(
            "; --- P/L dashboard ------------------------------------------------------------\n\n",
        );
        for (label, current, change) in [
            ("売上高", dashboard.sales.current, &summary.sales),
            ("営業利益", dashboard.profit.current, &summary.profit),
            ("費用合計", dashboard.cost.current, &summary.cost),
        ] {
            output.push_str(&format!(
                "{}  {}  前月比: {}\n",
                label,
                format_man_yen(current),
                self.change(change),
            ));
        }
        output.push('\n');

        output.push_str("月次推移 (売上 / 営業利益):\n");
        for (month, bar) in dashboard.monthly_trend.iter().zip(&summary.sales_bars) {
            output.push_str(&format!(
                "  {:>4} {:<20} {} / {}\n",
                month.month,
                self.bar(bar.ratio),
                format_man_yen(month.sales),
                format_man_yen(month.profit),
            ));
        }
        output.push('\n');

        output.push_str("費用内訳:\n");
        self.print_shares(&mut output, &summary.cost_breakdown);
        output
    }

    fn print_shares(&self, output: &mut String, shares: &[BreakdownShare]) {
        for share in shares {
            output.push_str(&format!(
                "  {:<12} {:>14} {:>5.1}%\n",
                share.name,
                format_yen(share.total),
                share.percent,
            ));
        }
        output.push('\n');
    }

    fn change(&self, change: &PeriodChange) -> String {
        let marker = match change.tone {
            Tone::Favorable => "",
            Tone::Unfavorable => " !",
        };
        format!("{}{}", format_change(change), marker)
    }

    fn bar(&self, ratio: f64) -> String {
        "#".repeat((ratio.clamp(0.0, 1.0) * 20.0).round() as usize)
    }
}
