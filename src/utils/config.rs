use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub table: TableConfig,
    pub cleanup: CleanupConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub delimiter: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("strings.csv"),
            output_dir: PathBuf::from("Generated"),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { delimiter: ';' }
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> crate::utils::errors::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::utils::errors::LocalizationError::ConfigError(e.to_string()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::utils::errors::LocalizationError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Falls back to defaults when the file is absent. A file that exists but
    /// does not parse is still an error.
    pub fn load_or_default(path: Option<&Path>) -> crate::utils::errors::Result<Self> {
        match path {
            Some(p) if p.exists() => Self::load_from_file(p),
            _ => Ok(Self::default()),
        }
    }

    pub fn delimiter_byte(&self) -> u8 {
        // validate() guarantees an ASCII delimiter
        self.table.delimiter as u8
    }

    fn validate(&self) -> crate::utils::errors::Result<()> {
        if !self.table.delimiter.is_ascii() {
            return Err(crate::utils::errors::LocalizationError::ConfigError(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.table.delimiter
            )));
        }
        Ok(())
    }
}
