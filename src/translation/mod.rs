use crate::csv_processor::{CsvStreamReader, StringsWriter, TableHeader, DEFAULT_DELIMITER};
use crate::utils::{LocalizationError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageReport {
    pub code: String,
    pub name: String,
    pub path: PathBuf,
    pub entries: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub rows_read: usize,
    pub languages: Vec<LanguageReport>,
}

impl ConversionReport {
    pub fn total_entries(&self) -> usize {
        self.languages.iter().map(|l| l.entries).sum()
    }

    pub fn language(&self, code: &str) -> Option<&LanguageReport> {
        self.languages.iter().find(|l| l.code == code)
    }
}

pub fn convert(table_path: &Path, output_dir: &Path) -> Result<ConversionReport> {
    convert_with_delimiter(table_path, output_dir, DEFAULT_DELIMITER)
}

pub fn convert_with_delimiter(
    table_path: &Path,
    output_dir: &Path,
    delimiter: u8,
) -> Result<ConversionReport> {
    let reader = CsvStreamReader::new(table_path).with_delimiter(delimiter);
    let mut records = reader.iter_records()?;

    // Header rows are read line by line so a blank one never shifts a data
    // row into its place.
    let (_, codes) = records
        .next_line_record()
        .ok_or(LocalizationError::MissingHeaderRow("language codes"))??;
    if codes.is_empty() {
        return Err(LocalizationError::MissingHeaderRow("language codes"));
    }
    let (_, names) = records
        .next_line_record()
        .ok_or(LocalizationError::MissingHeaderRow("language names"))??;

    let header = TableHeader::parse(&codes, &names)?;
    tracing::debug!(
        id_column = header.id_column,
        languages = ?header.language_codes(),
        "Parsed table header"
    );

    // Writers own their files; an early return below drops and closes them.
    let mut writers = Vec::with_capacity(header.languages.len());
    for language in &header.languages {
        writers.push(StringsWriter::create(output_dir, language)?);
    }

    let mut rows_read = 0;
    for result in records {
        let (index, row) = result?;
        rows_read += 1;

        let key = row.get(header.id_column).unwrap_or_default();
        let mut written = 0;
        for writer in writers.iter_mut() {
            if writer.write_row(key, &row)? {
                written += 1;
            }
        }
        tracing::trace!(row = index, key = %key, written, "Processed row");
    }

    let mut report = ConversionReport {
        rows_read,
        languages: Vec::with_capacity(writers.len()),
    };
    for (writer, language) in writers.into_iter().zip(&header.languages) {
        let path = writer.path().to_path_buf();
        let entries = writer.finish()?;

        tracing::info!(
            language = %language.code,
            entries,
            path = %path.display(),
            "Wrote localization"
        );

        report.languages.push(LanguageReport {
            code: language.code.clone(),
            name: language.name.clone(),
            path,
            entries,
        });
    }

    Ok(report)
}
