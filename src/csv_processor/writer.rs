use crate::csv_processor::header::LanguageColumn;
use crate::utils::{escape_value, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const RESOURCE_FILE_NAME: &str = "Localizable.strings";

/// Files are opened in append mode, so running twice against the same output
/// directory without cleaning it duplicates every entry.
pub struct StringsWriter {
    column: usize,
    path: PathBuf,
    writer: BufWriter<File>,
    entries_written: usize,
}

impl StringsWriter {
    pub fn create(output_dir: &Path, language: &LanguageColumn) -> Result<Self> {
        let dir = output_dir.join(format!("{}.lproj", language.code));
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(RESOURCE_FILE_NAME);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let mut writer = Self {
            column: language.index,
            path,
            writer: BufWriter::new(file),
            entries_written: 0,
        };
        writer.write_header(&language.name)?;
        Ok(writer)
    }

    fn write_header(&mut self, language_name: &str) -> Result<()> {
        write!(self.writer, "/**\n * {} localization.\n*/\n", language_name)?;
        Ok(())
    }

    // Rows too short to reach the column write nothing.
    pub fn write_row(&mut self, key: &str, row: &csv::StringRecord) -> Result<bool> {
        match row.get(self.column) {
            Some(value) if !value.is_empty() => {
                self.write_entry(key, value)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn write_entry(&mut self, key: &str, value: &str) -> Result<()> {
        writeln!(self.writer, "\"{}\" = \"{}\";", key, escape_value(value))?;
        self.entries_written += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.entries_written)
    }

    pub fn entries_written(&self) -> usize {
        self.entries_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
