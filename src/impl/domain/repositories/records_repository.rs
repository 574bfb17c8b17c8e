use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::BackofficeRecords;

/// Sources of the seed data, one per table.
pub struct RecordSources<T> {
    pub requests: T,
    pub applicant_history: T,
    pub approver_history: T,
    pub dashboards: T,
}

#[async_trait]
pub trait RecordsRepository: Send + Sync {
    fn from_string(&self, sources: RecordSources<&str>) -> Result<BackofficeRecords, ServerError>;

    async fn from_file<P>(
        &self,
        sources: RecordSources<P>,
    ) -> Result<BackofficeRecords, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
