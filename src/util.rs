use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::{
            config_ron_datasource::{ConfigRonDatasource as _, ConfigRonDatasourceImpl},
            dashboards_ron_datasource::DashboardsRonDatasourceImpl,
            history_csv_datasource::HistoryCsvDatasourceImpl,
            requests_ron_datasource::RequestsRonDatasourceImpl,
        },
        fixtures,
        repositories::records_repository_impl::RecordsRepositoryImpl,
    },
    domain::repositories::records_repository::{RecordSources, RecordsRepository as _},
    entities::{
        ApplicantHistoryEntry, ApproverHistoryEntry, BackofficeConfig, BackofficeRecords,
    },
    repositories::FileExportRepository,
    usecases::{
        ApprovalDesk, DashboardUsecase, ExportUsecase, HistoryBrowser, TransportSheet,
    },
};

/// Application context: owns all mutable state of a session. Subsystems are
/// reached through it by reference; nothing is global.
pub struct Backoffice {
    pub config: BackofficeConfig,
    pub approvals: ApprovalDesk,
    pub applicant_history: HistoryBrowser<ApplicantHistoryEntry>,
    pub approver_history: HistoryBrowser<ApproverHistoryEntry>,
    pub dashboards: DashboardUsecase,
    pub transport: TransportSheet,
}

impl Backoffice {
    pub fn new(config: BackofficeConfig, records: BackofficeRecords) -> Self {
        Self {
            config,
            approvals: ApprovalDesk::new(records.requests),
            applicant_history: HistoryBrowser::new(records.applicant_history),
            approver_history: HistoryBrowser::new(records.approver_history),
            dashboards: DashboardUsecase::new(records.dashboards),
            transport: TransportSheet::default(),
        }
    }

    /// Exporter writing into the configured export directory.
    pub fn exporter(&self) -> ExportUsecase<FileExportRepository> {
        ExportUsecase::new(FileExportRepository::new(self.config.export_dir.clone()))
    }
}

pub struct BackofficeUtil {
    config: BackofficeConfig,
    records_repository: RecordsRepositoryImpl<
        RequestsRonDatasourceImpl,
        HistoryCsvDatasourceImpl<ApplicantHistoryEntry>,
        HistoryCsvDatasourceImpl<ApproverHistoryEntry>,
        DashboardsRonDatasourceImpl,
    >,
}

impl BackofficeUtil {
    pub fn new(config: BackofficeConfig) -> Self {
        Self {
            config,
            records_repository: RecordsRepositoryImpl::new(),
        }
    }

    pub fn from_config_string(config_ron: &str) -> Result<Self, ServerError> {
        Ok(Self::new(ConfigRonDatasourceImpl::new().from_string(config_ron)?))
    }

    pub fn from_config_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Self::new(ConfigRonDatasourceImpl::new().from_file(path)?))
    }

    pub fn config(&self) -> &BackofficeConfig {
        &self.config
    }

    /// Session seeded with the built-in demo data.
    pub fn demo(&self) -> Result<Backoffice, ServerError> {
        self.from_string(RecordSources {
            requests: fixtures::REQUESTS_RON,
            applicant_history: fixtures::APPLICANT_HISTORY_CSV,
            approver_history: fixtures::APPROVER_HISTORY_CSV,
            dashboards: fixtures::DASHBOARDS_RON,
        })
    }

    pub fn from_string(&self, sources: RecordSources<&str>) -> Result<Backoffice, ServerError> {
        let records = self.records_repository.from_string(sources)?;
        Ok(Backoffice::new(self.config.clone(), records))
    }

    pub async fn from_file<P>(&self, sources: RecordSources<P>) -> Result<Backoffice, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let records = self.records_repository.from_file(sources).await?;
        Ok(Backoffice::new(self.config.clone(), records))
    }
}

impl Default for BackofficeUtil {
    fn default() -> Self {
        Self::new(BackofficeConfig::default())
    }
}
