use std::path::PathBuf;

use async_trait::async_trait;
use fractic_server_error::ServerError;

/// Destination for encoded CSV exports.
#[async_trait]
pub trait ExportRepository: Send + Sync {
    /// Stores `contents` under `filename` and returns where it ended up.
    async fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, ServerError>;
}
