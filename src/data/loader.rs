use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::SampleSeries;

/// Problems in the contents of a sample file.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line} is missing (a sample file needs x values on line 1 and ψ values on line 2)")]
    MissingLine { line: usize },

    #[error("line {line} holds no values")]
    EmptyLine { line: usize },

    #[error("line {line}, value {index}: '{token}' is not a number")]
    InvalidToken {
        line: usize,
        index: usize,
        token: String,
    },

    #[error("line {line}, value {index}: '{token}' is not finite")]
    NonFinite {
        line: usize,
        index: usize,
        token: String,
    },

    #[error("x has {x} values but ψ has {y}")]
    LengthMismatch { x: usize, y: usize },
}

/// Failure to turn a file on disk into a [`SampleSeries`].
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("failed to read '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl SeriesError {
    /// The I/O error kind, if the failure came from the filesystem.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            SeriesError::Io { source, .. } => Some(source.kind()),
            SeriesError::Parse { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a sample file from disk.
pub fn load_series(path: &Path) -> Result<SampleSeries, SeriesError> {
    let text = std::fs::read_to_string(path).map_err(|source| SeriesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_series(&text).map_err(|source| SeriesError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the two-line sample format.
///
/// ```text
/// 0.00000 0.00010 0.00020 ...     <- x (Å)
/// 1.00000 0.99999 0.99996 ...     <- ψ (Å^-1/2)
/// ```
///
/// Values are separated by any whitespace; trailing whitespace and any lines
/// after the second are ignored.
pub fn parse_series(text: &str) -> Result<SampleSeries, ParseError> {
    let mut lines = text.lines();

    let x = parse_line(lines.next(), 1)?;
    let y = parse_line(lines.next(), 2)?;

    if x.len() != y.len() {
        return Err(ParseError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    Ok(SampleSeries { x, y })
}

fn parse_line(line: Option<&str>, line_no: usize) -> Result<Vec<f64>, ParseError> {
    let line = line.ok_or(ParseError::MissingLine { line: line_no })?;

    let values = line
        .split_whitespace()
        .enumerate()
        .map(|(index, tok)| parse_value(tok, line_no, index))
        .collect::<Result<Vec<f64>, _>>()?;

    if values.is_empty() {
        return Err(ParseError::EmptyLine { line: line_no });
    }
    Ok(values)
}

fn parse_value(tok: &str, line: usize, index: usize) -> Result<f64, ParseError> {
    let value = tok.parse::<f64>().map_err(|_| ParseError::InvalidToken {
        line,
        index,
        token: tok.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite {
            line,
            index,
            token: tok.to_string(),
        });
    }
    Ok(value)
}
