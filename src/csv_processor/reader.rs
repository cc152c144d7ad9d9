use crate::utils::{LocalizationError, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const DEFAULT_DELIMITER: u8 = b';';

pub struct CsvStreamReader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvStreamReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn iter_records(&self) -> Result<CsvRecordIterator> {
        if !file_exists(&self.path) {
            return Err(LocalizationError::FileNotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        Ok(CsvRecordIterator {
            delimiter: self.delimiter,
            lines: Some(BufReader::new(file)),
            records: None,
            current_index: 0,
        })
    }
}

pub struct CsvRecordIterator {
    delimiter: u8,
    lines: Option<BufReader<File>>,
    records: Option<csv::Reader<BufReader<File>>>,
    current_index: usize,
}

impl CsvRecordIterator {
    /// Reads one physical line as a record, so an empty line comes back as an
    /// empty record instead of being skipped. Only valid before the first
    /// call to `next`.
    pub fn next_line_record(&mut self) -> Option<Result<(usize, StringRecord)>> {
        let source = self.lines.as_mut()?;

        let mut line = Vec::new();
        match source.read_until(b'\n', &mut line) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(e.into())),
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }

        let index = self.current_index;
        self.current_index += 1;
        Some(parse_line(&line, self.delimiter).map(|record| (index, record)))
    }
}

impl Iterator for CsvRecordIterator {
    type Item = Result<(usize, StringRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.records.is_none() {
            let source = self.lines.take()?;
            self.records = Some(reader_builder(self.delimiter).from_reader(source));
        }
        let reader = self.records.as_mut()?;

        match reader.records().next() {
            Some(Ok(record)) => {
                let index = self.current_index;
                self.current_index += 1;
                Some(Ok((index, record)))
            }
            Some(Err(e)) => Some(Err(LocalizationError::CsvError(e))),
            None => None,
        }
    }
}

fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.delimiter(delimiter).has_headers(false).flexible(true);
    builder
}

fn parse_line(line: &[u8], delimiter: u8) -> Result<StringRecord> {
    let mut reader = reader_builder(delimiter).from_reader(line);
    let mut record = StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record)
}

pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_table(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("strings.csv");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_semicolon_records_with_indices() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "id;en\nName;English\nhello;Hello\n");

        let records: Vec<_> = CsvStreamReader::new(&path)
            .iter_records()
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].0, 0);
        assert_eq!(&records[2].1[0], "hello");
        assert_eq!(&records[2].1[1], "Hello");
    }

    #[test]
    fn line_records_keep_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "id;en\r\n\r\na;A\r\n");

        let mut iter = CsvStreamReader::new(&path).iter_records().unwrap();
        let (_, codes) = iter.next_line_record().unwrap().unwrap();
        let (index, blank) = iter.next_line_record().unwrap().unwrap();
        let (data_index, data) = iter.next().unwrap().unwrap();

        assert_eq!(&codes[1], "en");
        assert_eq!(index, 1);
        assert!(blank.is_empty());
        assert_eq!(data_index, 2);
        assert_eq!(&data[0], "a");
        assert!(iter.next().is_none());
    }

    #[test]
    fn line_records_end_at_eof() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "id;en");

        let mut iter = CsvStreamReader::new(&path).iter_records().unwrap();
        let (_, codes) = iter.next_line_record().unwrap().unwrap();
        assert_eq!(codes.len(), 2);
        assert!(iter.next_line_record().is_none());
    }

    #[test]
    fn ragged_rows_are_accepted() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "id;en;fr\nx;y;z\nshort\n");

        let records: Vec<_> = CsvStreamReader::new(&path)
            .iter_records()
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records[2].1.len(), 1);
    }

    #[test]
    fn quoted_field_may_contain_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "id;en\nk;\"a;b\"\n");

        let mut iter = CsvStreamReader::new(&path).iter_records().unwrap();
        let (_, header) = iter.next_line_record().unwrap().unwrap();
        let (_, record) = iter.next().unwrap().unwrap();
        assert_eq!(header.len(), 2);
        assert_eq!(&record[1], "a;b");
    }

    #[test]
    fn custom_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "id,en\n");

        let (_, record) = CsvStreamReader::new(&path)
            .with_delimiter(b',')
            .iter_records()
            .unwrap()
            .next_line_record()
            .unwrap()
            .unwrap();
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.csv");

        match CsvStreamReader::new(&missing).iter_records() {
            Err(LocalizationError::FileNotFound(p)) => assert_eq!(p, missing),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("expected FileNotFound"),
        }
    }
}
