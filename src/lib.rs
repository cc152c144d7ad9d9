pub mod csv_processor;
pub mod runner;
pub mod state;
pub mod translation;
pub mod utils;

pub use csv_processor::{CsvStreamReader, LanguageColumn, StringsWriter, TableHeader};
pub use runner::{run, RunOptions};
pub use state::{clean_output, CleanupManager, CleanupReport};
pub use translation::{convert, convert_with_delimiter, ConversionReport, LanguageReport};
pub use utils::{escape_value, AppConfig, LocalizationError, Result};
