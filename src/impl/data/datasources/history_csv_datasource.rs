use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::{ApplicantHistoryEntry, ApprovalAction, ApproverHistoryEntry, Category},
    errors::{InvalidApprovalAction, InvalidCategory, InvalidCsv, ReadError},
};

/// Cells shared by both history tables, in column order:
/// `id,category,title,amount,outcome,date`.
pub(crate) struct HistoryRecord<'a> {
    id: &'a str,
    category: Category,
    title: &'a str,
    amount: Option<i64>,
    outcome: &'a str,
    date: chrono::NaiveDate,
}

pub(crate) trait FromHistoryRecord: Sized {
    fn from_history_record(r: HistoryRecord<'_>) -> Result<Self, ServerError>;
}

impl FromHistoryRecord for ApplicantHistoryEntry {
    fn from_history_record(r: HistoryRecord<'_>) -> Result<Self, ServerError> {
        Ok(ApplicantHistoryEntry {
            id: r.id.to_string(),
            category: r.category,
            title: r.title.to_string(),
            amount: r.amount,
            status: r.outcome.to_string(),
            date: r.date,
        })
    }
}

impl FromHistoryRecord for ApproverHistoryEntry {
    fn from_history_record(r: HistoryRecord<'_>) -> Result<Self, ServerError> {
        Ok(ApproverHistoryEntry {
            id: r.id.to_string(),
            category: r.category,
            title: r.title.to_string(),
            amount: r.amount,
            action: ApprovalAction::from_label(r.outcome)
                .ok_or_else(|| InvalidApprovalAction::new(r.outcome))?,
            date: r.date,
        })
    }
}

#[async_trait]
pub(crate) trait HistoryCsvDatasource<T: FromHistoryRecord + Send + 'static>: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<T>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<T>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct HistoryCsvDatasourceImpl<T: FromHistoryRecord> {
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T: FromHistoryRecord> HistoryCsvDatasourceImpl<T> {
    pub(crate) fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

#[async_trait]
impl<T> HistoryCsvDatasource<T> for HistoryCsvDatasourceImpl<T>
where
    T: FromHistoryRecord + Send + 'static,
{
    fn from_string(&self, s: &str) -> Result<Vec<T>, ServerError> {
        let entries = csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_category = r.get(1).unwrap_or("");
                    let raw_title = r.get(2).unwrap_or("");
                    let raw_amount = r.get(3).unwrap_or("");
                    let raw_outcome = r.get(4).unwrap_or("");
                    let raw_date = r.get(5).unwrap_or("");

                    // Parse.
                    let category = Category::from_label(raw_category)
                        .ok_or_else(|| InvalidCategory::new(raw_category))?;
                    let amount: AmountModel = AmountModel::from_str(raw_amount)?;
                    let date: ISODateModel = ISODateModel::from_str(raw_date)?;

                    // Build.
                    T::from_history_record(HistoryRecord {
                        id: raw_id,
                        category,
                        title: raw_title,
                        amount: amount.into(),
                        outcome: raw_outcome,
                        date: date.into(),
                    })
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = entries.len(), "parsed history table");
        Ok(entries)
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<T>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn parses_applicant_history() {
        let entries = HistoryCsvDatasourceImpl::<ApplicantHistoryEntry>::new()
            .from_string(fixtures::APPLICANT_HISTORY_CSV)
            .unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].category, Category::TransportClaim);
        assert_eq!(entries[1].amount, Some(8_420));
        assert_eq!(entries[1].status, "差戻→再申請中");
    }

    #[test]
    fn parses_approver_history() {
        let entries = HistoryCsvDatasourceImpl::<ApproverHistoryEntry>::new()
            .from_string(fixtures::APPROVER_HISTORY_CSV)
            .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].action, ApprovalAction::Returned);
    }

    #[test]
    fn empty_amount_is_missing() {
        let csv =
            "id,category,title,amount,outcome,date\nH-1,経費精算,文具,,承認→登録済,2025-10-01\n";
        let entries = HistoryCsvDatasourceImpl::<ApplicantHistoryEntry>::new()
            .from_string(csv)
            .unwrap();
        assert_eq!(entries[0].amount, None);
    }

    #[test]
    fn unknown_action_is_rejected() {
        let csv = "id,category,title,amount,outcome,date\nA-1,経費精算,文具,100,保留,2025-10-01\n";
        let result = HistoryCsvDatasourceImpl::<ApproverHistoryEntry>::new().from_string(csv);
        assert!(result.is_err());
    }
}
