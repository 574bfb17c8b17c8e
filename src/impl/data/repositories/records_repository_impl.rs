use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::datasources::{
        dashboards_ron_datasource::{DashboardsRonDatasource, DashboardsRonDatasourceImpl},
        history_csv_datasource::{HistoryCsvDatasource, HistoryCsvDatasourceImpl},
        requests_ron_datasource::{RequestsRonDatasource, RequestsRonDatasourceImpl},
    },
    domain::repositories::records_repository::{RecordSources, RecordsRepository},
    entities::{ApplicantHistoryEntry, ApproverHistoryEntry, BackofficeRecords},
};

pub(crate) struct RecordsRepositoryImpl<DS1, DS2, DS3, DS4>
where
    DS1: RequestsRonDatasource,
    DS2: HistoryCsvDatasource<ApplicantHistoryEntry>,
    DS3: HistoryCsvDatasource<ApproverHistoryEntry>,
    DS4: DashboardsRonDatasource,
{
    requests_datasource: DS1,
    applicant_history_datasource: DS2,
    approver_history_datasource: DS3,
    dashboards_datasource: DS4,
}

#[async_trait]
impl<DS1, DS2, DS3, DS4> RecordsRepository for RecordsRepositoryImpl<DS1, DS2, DS3, DS4>
where
    DS1: RequestsRonDatasource,
    DS2: HistoryCsvDatasource<ApplicantHistoryEntry>,
    DS3: HistoryCsvDatasource<ApproverHistoryEntry>,
    DS4: DashboardsRonDatasource,
{
    fn from_string(&self, sources: RecordSources<&str>) -> Result<BackofficeRecords, ServerError> {
        let records = BackofficeRecords {
            requests: self.requests_datasource.from_string(sources.requests)?,
            applicant_history: self
                .applicant_history_datasource
                .from_string(sources.applicant_history)?,
            approver_history: self
                .approver_history_datasource
                .from_string(sources.approver_history)?,
            dashboards: self.dashboards_datasource.from_string(sources.dashboards)?,
        };
        info!(requests = records.requests.len(), "loaded back-office records");
        Ok(records)
    }

    async fn from_file<P>(
        &self,
        sources: RecordSources<P>,
    ) -> Result<BackofficeRecords, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let records = BackofficeRecords {
            requests: self.requests_datasource.from_file(sources.requests).await?,
            applicant_history: self
                .applicant_history_datasource
                .from_file(sources.applicant_history)
                .await?,
            approver_history: self
                .approver_history_datasource
                .from_file(sources.approver_history)
                .await?,
            dashboards: self.dashboards_datasource.from_file(sources.dashboards).await?,
        };
        info!(requests = records.requests.len(), "loaded back-office records from files");
        Ok(records)
    }
}

impl
    RecordsRepositoryImpl<
        RequestsRonDatasourceImpl,
        HistoryCsvDatasourceImpl<ApplicantHistoryEntry>,
        HistoryCsvDatasourceImpl<ApproverHistoryEntry>,
        DashboardsRonDatasourceImpl,
    >
{
    pub(crate) fn new() -> Self {
        RecordsRepositoryImpl {
            requests_datasource: RequestsRonDatasourceImpl::new(),
            applicant_history_datasource: HistoryCsvDatasourceImpl::new(),
            approver_history_datasource: HistoryCsvDatasourceImpl::new(),
            dashboards_datasource: DashboardsRonDatasourceImpl::new(),
        }
    }
}
