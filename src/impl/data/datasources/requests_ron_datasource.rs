use std::{collections::HashSet, convert::TryFrom as _};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;
use tracing::debug;

use crate::{
    data::models::request_model::RequestModel,
    entities::Request,
    errors::{DuplicateRequestId, InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait RequestsRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Request>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<Request>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct RequestsRonDatasourceImpl;

impl RequestsRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RequestsRonDatasource for RequestsRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Request>, ServerError> {
        let models: Vec<RequestModel> =
            from_str(s).map_err(|e| InvalidRon::with_debug("Request list", &e))?;
        let requests = models
            .into_iter()
            .map(Request::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        if let Some(duplicate) = requests.iter().find(|r| !seen.insert(&r.id)) {
            return Err(DuplicateRequestId::new(&duplicate.id));
        }

        debug!(count = requests.len(), "parsed request list");
        Ok(requests)
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<Request>, ServerError>
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
    use crate::{data::fixtures, entities::{Counterparty, RequestStatus}};

    #[test]
    fn parses_seed_requests() {
        let requests = RequestsRonDatasourceImpl::new()
            .from_string(fixtures::REQUESTS_RON)
            .unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].id.0, "REQ-24001");
        assert_eq!(requests[0].confidence.percent(), 92);
        assert!(requests[0].urgent);
        assert_eq!(requests[1].counterparty, Counterparty::None);
        assert!(requests.iter().all(|r| r.status == RequestStatus::Pending));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let one = r#"(
            id: "X1", category: ExpenseClaim, title: "Coffee", amount: 500, currency: "JPY",
            who_name: "a", who_dept: "b", what: "c", when: "2025-10-01", where_to: "d",
            why: "e", how: "f", risk: Low, confidence: 0.5, received_date: "2025-10-01",
        )"#;
        let ron = format!("[{}, {}]", one, one);
        assert!(RequestsRonDatasourceImpl::new().from_string(&ron).is_err());
    }

    #[test]
    fn rejects_confidence_out_of_range() {
        let ron = r#"[(
            id: "X1", category: ExpenseClaim, title: "Coffee", amount: 500, currency: "JPY",
            who_name: "a", who_dept: "b", what: "c", when: "2025-10-01", where_to: "d",
            why: "e", how: "f", risk: Low, confidence: 1.5, received_date: "2025-10-01",
        )]"#;
        assert!(RequestsRonDatasourceImpl::new().from_string(ron).is_err());
    }

    #[test]
    fn rejects_unknown_currency() {
        let ron = r#"[(
            id: "X1", category: ExpenseClaim, title: "Coffee", amount: 500, currency: "XYZ",
            who_name: "a", who_dept: "b", what: "c", when: "2025-10-01", where_to: "d",
            why: "e", how: "f", risk: Low, confidence: 0.5, received_date: "2025-10-01",
        )]"#;
        assert!(RequestsRonDatasourceImpl::new().from_string(ron).is_err());
    }
}
