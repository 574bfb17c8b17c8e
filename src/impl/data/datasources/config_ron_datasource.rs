use fractic_server_error::ServerError;
use ron::from_str;

use crate::{entities::BackofficeConfig, errors::{InvalidRon, ReadError}};

pub(crate) trait ConfigRonDatasource {
    fn from_string(&self, s: &str) -> Result<BackofficeConfig, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<BackofficeConfig, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct ConfigRonDatasourceImpl;

impl ConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ConfigRonDatasource for ConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<BackofficeConfig, ServerError> {
        from_str(s).map_err(|e| InvalidRon::with_debug("BackofficeConfig", &e))
    }

    fn from_file<P>(&self, path: P) -> Result<BackofficeConfig, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&std::fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
