use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
pub struct BackofficeConfig {
    #[serde(default)]
    pub build_mode: BuildMode,
    /// Directory exported CSV files are written to.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        Self {
            build_mode: BuildMode::default(),
            export_dir: default_export_dir(),
        }
    }
}

impl BackofficeConfig {
    /// Asset root the front end is served under.
    pub fn base_path(&self) -> &'static str {
        match self.build_mode {
            BuildMode::Development => "/",
            BuildMode::Production => "/choppaya/",
        }
    }
}
