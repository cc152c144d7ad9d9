pub mod header;
pub mod reader;
pub mod writer;

pub use header::{LanguageColumn, TableHeader, ID_COLUMN};
pub use reader::{file_exists, CsvRecordIterator, CsvStreamReader, DEFAULT_DELIMITER};
pub use writer::{StringsWriter, RESOURCE_FILE_NAME};
