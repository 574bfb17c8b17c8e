use chrono::NaiveDate;
use tracing::debug;

use crate::{
    domain::logic::transport_fare::{quote, total_after_deduction},
    entities::{FareQuote, RouteQuery, TransportRow},
};

fn row(
    date: (i32, u32, u32),
    from: &str,
    to: &str,
    via: Option<&str>,
    fare: i64,
    after_deduction: i64,
    note: &str,
) -> TransportRow {
    TransportRow {
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
        from: from.to_string(),
        to: to.to_string(),
        via: via.map(str::to_string),
        fare: Some(fare),
        after_deduction: Some(after_deduction),
        note: note.to_string(),
    }
}

/// Monthly transport claim being filled in row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSheet {
    rows: Vec<TransportRow>,
}

impl Default for TransportSheet {
    fn default() -> Self {
        Self {
            rows: vec![
                row((2025, 10, 1), "新宿", "品川", None, 200, 0, "定期内"),
                row((2025, 10, 2), "新宿", "品川", None, 200, 0, "定期内"),
            ],
        }
    }
}

impl TransportSheet {
    pub fn new(rows: Vec<TransportRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TransportRow] {
        &self.rows
    }

    pub fn add_blank_row(&mut self) {
        self.rows.push(TransportRow::default());
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Replaces the sheet with a ready-made example month.
    pub fn load_sample(&mut self) {
        self.rows = vec![
            row((2025, 10, 10), "渋谷", "大手町", None, 240, 240, ""),
            row((2025, 10, 11), "渋谷", "大手町", Some("神保町"), 260, 260, "打合せ2件"),
            row((2025, 10, 15), "新宿", "品川", None, 200, 0, "定期内"),
        ];
    }

    /// Edits row `index` in place. Returns false if there is no such row.
    pub fn update_row<F>(&mut self, index: usize, edit: F) -> bool
    where
        F: FnOnce(&mut TransportRow),
    {
        match self.rows.get_mut(index) {
            Some(row) => {
                edit(row);
                true
            }
            None => false,
        }
    }

    pub fn total_after_deduction(&self) -> i64 {
        total_after_deduction(&self.rows)
    }

    pub fn quote_route(&self, route: &RouteQuery) -> FareQuote {
        let q = quote(route);
        debug!(summary = %q.summary, fare = q.fare, "quoted route");
        q
    }
}
