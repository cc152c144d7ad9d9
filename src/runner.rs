use crate::csv_processor::file_exists;
use crate::state::CleanupManager;
use crate::translation::{convert_with_delimiter, ConversionReport};
use crate::utils::{AppConfig, LocalizationError, Result};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub root: PathBuf,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub clean: bool,
}

impl RunOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            input: None,
            output: None,
            config: None,
            clean: true,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.root.join(CONFIG_FILE_NAME))
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        AppConfig::load_or_default(Some(&self.config_path()))
    }

    pub fn input_path(&self, config: &AppConfig) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| self.root.join(&config.paths.input_file))
    }

    pub fn output_path(&self, config: &AppConfig) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.root.join(&config.paths.output_dir))
    }
}

/// Cleans previously generated files under the output directory, then
/// converts the table. Nothing is deleted when the table is missing.
pub fn run(options: &RunOptions, config: &AppConfig) -> Result<ConversionReport> {
    let input = options.input_path(config);
    let output = options.output_path(config);

    if !file_exists(&input) {
        return Err(LocalizationError::FileNotFound(input));
    }

    if options.clean && config.cleanup.enabled {
        CleanupManager::new(&output).run_cleanup()?;
    } else {
        tracing::info!(output = %output.display(), "Skipping cleanup, entries will be appended");
    }

    let report = convert_with_delimiter(&input, &output, config.delimiter_byte())?;

    tracing::info!(
        rows = report.rows_read,
        languages = report.languages.len(),
        entries = report.total_entries(),
        "Conversion finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_default_under_root() {
        let options = RunOptions::new("/project");
        let config = AppConfig::default();

        assert_eq!(options.config_path(), PathBuf::from("/project/config.toml"));
        assert_eq!(options.input_path(&config), PathBuf::from("/project/strings.csv"));
        assert_eq!(options.output_path(&config), PathBuf::from("/project/Generated"));
    }

    #[test]
    fn explicit_paths_win() {
        let mut options = RunOptions::new("/project");
        options.input = Some(PathBuf::from("/elsewhere/table.csv"));
        options.output = Some(PathBuf::from("/out"));
        options.config = Some(PathBuf::from("/etc/gen.toml"));
        let config = AppConfig::default();

        assert_eq!(options.config_path(), PathBuf::from("/etc/gen.toml"));
        assert_eq!(options.input_path(&config), PathBuf::from("/elsewhere/table.csv"));
        assert_eq!(options.output_path(&config), PathBuf::from("/out"));
    }
}
