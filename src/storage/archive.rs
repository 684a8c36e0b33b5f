use crate::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Directory of daily log files
pub struct LogArchive {
    base_path: PathBuf,
}

impl LogArchive {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns path to the day's log: {base_path}/{date}.md
    pub fn log_path(&self, date: &str) -> PathBuf {
        self.base_path.join(format!("{}.md", date))
    }

    /// Ensure the archive directory exists
    pub async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    /// Write the day's log, replacing any earlier export of the same date
    pub async fn write(&self, date: &str, contents: &str) -> Result<PathBuf> {
        self.ensure_dir().await?;
        let path = self.log_path(date);
        fs::write(&path, contents).await?;

        tracing::info!(
            path = %path.display(),
            bytes = contents.len(),
            "Log written"
        );
        Ok(path)
    }
}
