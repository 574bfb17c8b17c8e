use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    domain::repositories::export_repository::ExportRepository,
    errors::{InvalidExportFilename, WriteError},
};

/// Writes exports into a directory, one file per export. Existing files with
/// the same name are replaced. Filenames with a directory part are rejected, so
/// nothing is written outside the directory.
pub struct FileExportRepository {
    dir: PathBuf,
}

impl FileExportRepository {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ExportRepository for FileExportRepository {
    async fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, ServerError> {
        let mut components = Path::new(filename).components();
        let (Some(Component::Normal(name)), None) = (components.next(), components.next()) else {
            return Err(InvalidExportFilename::new(filename));
        };
        let path = self.dir.join(name);
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| WriteError::with_debug(&self.dir.to_string_lossy(), &e))?;
        tokio::fs::write(&path, contents.as_bytes())
            .await
            .map_err(|e| WriteError::with_debug(&path.to_string_lossy(), &e))?;
        info!(path = %path.display(), bytes = contents.len(), "saved export");
        Ok(path)
    }
}
