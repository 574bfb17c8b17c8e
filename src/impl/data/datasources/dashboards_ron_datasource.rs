use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::dashboard_model::DashboardsModel,
    entities::Dashboards,
    errors::{InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait DashboardsRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Dashboards, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Dashboards, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct DashboardsRonDatasourceImpl;

impl DashboardsRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DashboardsRonDatasource for DashboardsRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Dashboards, ServerError> {
        let model: DashboardsModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("Dashboards", &e))?;
        Ok(model.into())
    }

    async fn from_file<P>(&self, path: P) -> Result<Dashboards, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}
