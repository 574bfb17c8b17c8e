use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidAmount;

/// Whole-unit amount as written in source tables ("286,000", "(1,200)" for
/// negatives). An empty cell is a missing amount.
#[derive(Debug)]
pub(crate) struct AmountModel(pub Option<i64>);
impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(AmountModel(None));
        }
        let is_negative = raw.starts_with("(") && raw.ends_with(")");
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .parse::<i64>()
            .map_err(|_| InvalidAmount::new(numeric_part))?;
        if !is_negative {
            return Ok(AmountModel(Some(amount)));
        }
        amount
            .checked_neg()
            .map(|a| AmountModel(Some(a)))
            .ok_or_else(|| InvalidAmount::new(raw))
    }
}

impl Into<Option<i64>> for AmountModel {
    fn into(self) -> Option<i64> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grouped_and_negative_amounts() {
        assert_eq!(AmountModel::from_str("286,000").unwrap().0, Some(286_000));
        assert_eq!(AmountModel::from_str("(1,200)").unwrap().0, Some(-1_200));
        assert_eq!(AmountModel::from_str(" 2980 ").unwrap().0, Some(2_980));
    }

    #[test]
    fn empty_cell_is_missing() {
        assert_eq!(AmountModel::from_str("").unwrap().0, None);
    }

    #[test]
    fn rejects_unrepresentable_negation() {
        assert!(AmountModel::from_str("(-9223372036854775808)").is_err());
        assert_eq!(
            AmountModel::from_str("(9223372036854775807)").unwrap().0,
            Some(-i64::MAX)
        );
    }

    #[test]
    fn rejects_fractional_amounts() {
        assert!(AmountModel::from_str("12.5").is_err());
    }
}
