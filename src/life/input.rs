use std::{fs, path::PathBuf};

use super::error::{LifeError, Result};

pub trait InputReader {
    /// # Errors
    ///
    /// Readers backed by external sources fail when the source is
    /// unavailable.
    fn read_input(&self) -> Result<Vec<String>>;
}

pub const DEFAULT_BOARD: [&str; 8] = [
    ".sa..Aa.....S...",
    "L..K..........L.",
    "......S...s.....",
    "l..k............",
    "......S.....A...",
    "........a.......",
    "..l.............",
    "l.....K.........",
];

pub struct ConstInputReader {
    rows: Vec<String>,
}

impl ConstInputReader {
    #[must_use]
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Self {
        Self {
            rows: rows.iter().map(|row| row.as_ref().to_owned()).collect(),
        }
    }
}

impl Default for ConstInputReader {
    fn default() -> Self {
        Self::new(&DEFAULT_BOARD)
    }
}

impl InputReader for ConstInputReader {
    fn read_input(&self) -> Result<Vec<String>> {
        Ok(self.rows.clone())
    }
}

/// One board row per line; trailing blank lines are dropped.
pub struct FileInputReader {
    path: PathBuf,
}

impl FileInputReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InputReader for FileInputReader {
    fn read_input(&self) -> Result<Vec<String>> {
        let text =
            fs::read_to_string(&self.path).map_err(|source| LifeError::Io {
                path: self.path.clone(),
                source,
            })?;

        let mut rows: Vec<String> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').to_owned())
            .collect();
        while rows.last().is_some_and(|row| row.trim().is_empty()) {
            rows.pop();
        }

        Ok(rows)
    }
}
