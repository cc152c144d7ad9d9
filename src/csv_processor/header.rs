use crate::utils::{LocalizationError, Result};
use csv::StringRecord;

pub const ID_COLUMN: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageColumn {
    pub index: usize,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct TableHeader {
    pub id_column: usize,
    pub languages: Vec<LanguageColumn>,
}

impl TableHeader {
    /// When the names row is shorter than the codes row (or blank) the code
    /// doubles as the name.
    pub fn parse(codes: &StringRecord, names: &StringRecord) -> Result<Self> {
        let id_column = codes
            .iter()
            .position(|code| code == ID_COLUMN)
            .ok_or(LocalizationError::MissingIdColumn)?;

        let languages = codes
            .iter()
            .enumerate()
            .skip(id_column + 1)
            .filter(|(_, code)| is_language_code(code))
            .map(|(index, code)| LanguageColumn {
                index,
                code: code.to_string(),
                name: names.get(index).unwrap_or(code).to_string(),
            })
            .collect();

        Ok(Self {
            id_column,
            languages,
        })
    }

    pub fn language_codes(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.code.as_str()).collect()
    }
}

fn is_language_code(code: &str) -> bool {
    !code.is_empty() && code != ID_COLUMN
}
