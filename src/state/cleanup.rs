use crate::csv_processor::RESOURCE_FILE_NAME;
use crate::utils::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct CleanupManager {
    root: PathBuf,
    file_name: String,
}

impl CleanupManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_name: RESOURCE_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// A missing root is treated as already clean.
    pub fn run_cleanup(&self) -> Result<CleanupReport> {
        let mut report = CleanupReport::default();

        if !self.root.exists() {
            debug!(root = %self.root.display(), "Nothing to clean");
            return Ok(report);
        }

        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            if !entry.file_type().is_file() || entry.file_name() != self.file_name.as_str() {
                continue;
            }

            let size = entry.metadata()?.len();
            std::fs::remove_file(entry.path())?;
            debug!(path = %entry.path().display(), "Removed resource file");

            report.bytes_freed += size;
            report.files_deleted.push(entry.into_path());
        }

        info!(
            root = %self.root.display(),
            files_deleted = report.files_deleted.len(),
            bytes_freed = report.bytes_freed,
            "Cleanup completed"
        );

        Ok(report)
    }
}

#[derive(Debug, Default)]
pub struct CleanupReport {
    pub files_deleted: Vec<PathBuf>,
    pub bytes_freed: u64,
}

pub fn clean_output(root: &Path) -> Result<CleanupReport> {
    CleanupManager::new(root).run_cleanup()
}
