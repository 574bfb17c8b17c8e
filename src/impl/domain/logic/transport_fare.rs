use crate::entities::{FareQuote, RouteQuery, TransportRow};

/// Placeholder fare until a route search backend exists.
pub(crate) const DUMMY_BASE_FARE: i64 = 200;

pub(crate) fn quote(route: &RouteQuery) -> FareQuote {
    let via = match &route.via {
        Some(via) if !via.is_empty() => format!("（経由：{}）", via),
        _ => String::new(),
    };
    FareQuote {
        summary: format!(
            "{} → {}{} / {}",
            route.from,
            route.to,
            via,
            route.date.format("%Y-%m-%d")
        ),
        fare: DUMMY_BASE_FARE,
        after_deduction: if route.deduct_commuter_pass {
            0
        } else {
            DUMMY_BASE_FARE
        },
    }
}

/// Blank cells count as zero.
pub(crate) fn total_after_deduction(rows: &[TransportRow]) -> i64 {
    rows.iter().map(|r| r.after_deduction.unwrap_or(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::date;

    fn route(via: Option<&str>, deduct: bool) -> RouteQuery {
        RouteQuery {
            from: "新宿".to_string(),
            to: "品川".to_string(),
            via: via.map(str::to_string),
            date: date(2025, 10, 31),
            deduct_commuter_pass: deduct,
        }
    }

    #[test]
    fn commuter_pass_zeroes_the_fare() {
        let q = quote(&route(None, true));
        assert_eq!(q.summary, "新宿 → 品川 / 2025-10-31");
        assert_eq!(q.fare, 200);
        assert_eq!(q.after_deduction, 0);
    }

    #[test]
    fn via_is_included_in_summary() {
        let q = quote(&route(Some("大崎"), false));
        assert_eq!(q.summary, "新宿 → 品川（経由：大崎） / 2025-10-31");
        assert_eq!(q.after_deduction, 200);
    }

    #[test]
    fn blank_cells_count_as_zero() {
        let rows = vec![
            TransportRow {
                after_deduction: Some(240),
                ..Default::default()
            },
            TransportRow::default(),
            TransportRow {
                after_deduction: Some(260),
                ..Default::default()
            },
        ];
        assert_eq!(total_after_deduction(&rows), 500);
    }
}
