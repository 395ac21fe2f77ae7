use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use super::types::{Sex, Species};

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("input does not contain a single row")]
    EmptyInput,

    #[error(
        "row {row} is {actual} fields wide but the first row is {expected}"
    )]
    RaggedRow {
        row:      usize,
        expected: usize,
        actual:   usize,
    },

    #[error("unknown symbol '{symbol}' at row {row}, column {column}")]
    UnknownSymbol {
        symbol: char,
        row:    usize,
        column: usize,
    },

    #[error("there is no legend key defined for {sex} {species}")]
    MissingLegendKey { species: Species, sex: Sex },

    #[error("failed to read board from {}: {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to format board: {0}")]
    Format(#[from] fmt::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
