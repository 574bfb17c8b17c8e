use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

use crate::entities::{Confidence, PeriodChange};

/// Shown in place of a missing number.
pub const PLACEHOLDER: &str = "—";

/// Thousands-grouped whole amount (ex. 286000 -> "286,000").
pub fn format_grouped(amount: i64) -> String {
    amount.to_formatted_string(&Locale::ja)
}

/// Amount followed by the ISO currency code (ex. "286,000 JPY").
///
/// Amounts are kept in whole currency units, so no decimal part is printed
/// regardless of the currency's usual exponent.
pub fn format_amount(amount: i64, currency: Currency) -> String {
    format!("{} {}", format_grouped(amount), currency.code())
}

/// Yen amount for dashboard figures (ex. "4,500,000 円").
pub fn format_yen(amount: i64) -> String {
    format!("{} 円", format_grouped(amount))
}

/// Yen amount in units of 10,000 (ex. 12500000 -> "1,250 万円",
/// 286000 -> "28.6 万円"). Up to three fraction digits, trailing zeros
/// dropped.
pub fn format_man_yen(amount: i64) -> String {
    let negative = amount < 0;
    let abs = amount.unsigned_abs();
    let whole = abs / 10_000;
    // Remainder in thousandths of 10,000, rounded half up.
    let mut thousandths = (abs % 10_000 + 5) / 10;
    let mut whole = whole;
    if thousandths == 1000 {
        whole += 1;
        thousandths = 0;
    }
    let fraction = format!("{:03}", thousandths);
    let fraction = fraction.trim_end_matches('0');
    format!(
        "{}{}{}{} 万円",
        if negative { "-" } else { "" },
        whole.to_formatted_string(&Locale::ja),
        if fraction.is_empty() { "" } else { "." },
        fraction
    )
}

/// History amount ("254,000円"), or the placeholder if missing.
pub fn format_optional_yen(amount: Option<i64>) -> String {
    match amount {
        Some(a) => format!("{}円", format_grouped(a)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Percentage change with explicit sign and one decimal (ex. "(+13.6%)").
pub fn format_change(change: &PeriodChange) -> String {
    match change.percent {
        Some(p) => format!("({}{:.1}%)", if change.difference >= 0 { "+" } else { "" }, p),
        None => format!("({})", PLACEHOLDER),
    }
}

pub fn format_confidence(confidence: Confidence) -> String {
    format!("{}%", confidence.percent())
}
