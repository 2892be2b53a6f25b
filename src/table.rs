//! The tabular file the URLs come from and the results go back into.
//!
//! The file is a CSV with a header row. Only three columns mean anything
//! here: `url` must exist, `code` and `datetime` are appended when missing.
//! Everything else is carried through untouched, and rows keep their order.
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use crate::checker::CheckResult;

/// Format of the `datetime` cells, local wall-clock time.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const URL_COLUMN: &str = "url";
const CODE_COLUMN: &str = "code";
const DATETIME_COLUMN: &str = "datetime";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file {path:?} not found")]
    NotFound { path: PathBuf },
    #[error("Input file {path:?} is empty")]
    Empty { path: PathBuf },
    #[error("Input file {path:?} must contain a 'url' column")]
    MissingUrlColumn { path: PathBuf },
    #[error("Cannot read input file {path:?}: {err}")]
    Read { path: PathBuf, err: csv::Error },
    #[error("Cannot save file {path:?}: {err}")]
    Write { path: PathBuf, err: csv::Error },
}

/// In-memory copy of the CSV file, ready to receive check results.
#[derive(Debug)]
pub struct Table {
    path: PathBuf,
    headers: StringRecord,
    rows: Vec<StringRecord>,
    url_index: usize,
    code_index: usize,
    datetime_index: usize,
}

impl Table {
    /// Reads the whole file and makes sure the `code` and `datetime`
    /// columns exist, appending empty ones when they do not.
    ///
    /// # Errors
    ///
    /// Will return an error if the file is missing, empty, malformed or has
    /// no `url` column.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|err| open_error(path, err))?;

        let mut headers = reader.headers().map_err(|err| read_error(path, err))?.clone();

        if headers.is_empty() {
            return Err(Error::Empty {
                path: path.to_path_buf(),
            });
        }

        let Some(url_index) = headers.iter().position(|field| field == URL_COLUMN) else {
            return Err(Error::MissingUrlColumn {
                path: path.to_path_buf(),
            });
        };

        let mut rows = reader
            .records()
            .collect::<Result<Vec<StringRecord>, csv::Error>>()
            .map_err(|err| read_error(path, err))?;

        let code_index = find_or_append(&mut headers, CODE_COLUMN);
        let datetime_index = find_or_append(&mut headers, DATETIME_COLUMN);

        for row in &mut rows {
            while row.len() < headers.len() {
                row.push_field("");
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            headers,
            rows,
            url_index,
            code_index,
            datetime_index,
        })
    }

    /// The distinct URLs of the table, in first-seen row order.
    #[must_use]
    pub fn unique_urls(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut urls = Vec::new();

        for url in self.urls() {
            if seen.insert(url) {
                urls.push(url.to_string());
            }
        }

        urls
    }

    /// The `url` cell of every row, duplicates included.
    #[must_use]
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        let url_index = self.url_index;
        self.rows.iter().filter_map(move |row| row.get(url_index))
    }

    /// Fills the `code` and `datetime` cells of every row whose URL has a
    /// result. Rows sharing a URL get identical cells.
    pub fn apply(&mut self, results: &BTreeMap<String, CheckResult>) {
        for row in &mut self.rows {
            let result = row.get(self.url_index).and_then(|url| results.get(url));

            if let Some(result) = result {
                let code_cell = result.outcome.as_code().map_or_else(String::new, |code| code.to_string());
                let datetime_cell = result.observed_at.format(DATETIME_FORMAT).to_string();

                *row = replace_fields(
                    row,
                    &[(self.code_index, code_cell.as_str()), (self.datetime_index, datetime_cell.as_str())],
                );
            }
        }
    }

    /// Writes the table back to the file it was loaded from.
    ///
    /// # Errors
    ///
    /// Will return an error if the file cannot be (re)written.
    pub fn save(&self) -> Result<(), Error> {
        let mut writer = csv::Writer::from_path(&self.path).map_err(|err| self.write_error(err))?;

        writer.write_record(&self.headers).map_err(|err| self.write_error(err))?;

        for row in &self.rows {
            writer.write_record(row).map_err(|err| self.write_error(err))?;
        }

        writer.flush().map_err(|err| self.write_error(err.into()))
    }

    fn write_error(&self, err: csv::Error) -> Error {
        Error::Write {
            path: self.path.clone(),
            err,
        }
    }
}

fn find_or_append(headers: &mut StringRecord, name: &str) -> usize {
    match headers.iter().position(|field| field == name) {
        Some(index) => index,
        None => {
            headers.push_field(name);
            headers.len() - 1
        }
    }
}

fn replace_fields(row: &StringRecord, replacements: &[(usize, &str)]) -> StringRecord {
    row.iter()
        .enumerate()
        .map(|(index, field)| {
            replacements
                .iter()
                .find(|(target, _)| *target == index)
                .map_or(field, |(_, value)| *value)
        })
        .collect()
}

fn open_error(path: &Path, err: csv::Error) -> Error {
    if let csv::ErrorKind::Io(io_err) = err.kind() {
        if io_err.kind() == std::io::ErrorKind::NotFound {
            return Error::NotFound {
                path: path.to_path_buf(),
            };
        }
    }

    read_error(path, err)
}

fn read_error(path: &Path, err: csv::Error) -> Error {
    Error::Read {
        path: path.to_path_buf(),
        err,
    }
}
