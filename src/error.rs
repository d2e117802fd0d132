//! Error types.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::Metric;

/// Malformed text input. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: unknown record tag `{tag}`")]
    UnknownTag { line: usize, tag: String },

    #[error("line {line}: missing identifier")]
    MissingId { line: usize },

    #[error("line {line}: malformed metric token `{token}`")]
    MalformedMetric { line: usize, token: String },

    #[error("line {line}: unknown metric `{name}`")]
    UnknownMetric { line: usize, name: String },

    #[error("line {line}: metric `{metric}` given twice")]
    DuplicateMetric { line: usize, metric: Metric },

    #[error("line {line}: metric `{metric}` missing")]
    MissingMetric { line: usize, metric: Metric },

    #[error("line {line}: invalid integer `{value}`")]
    InvalidInteger {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: sample `{sample}` has no preference token")]
    MissingPreferences { line: usize, sample: String },

    #[error("line {line}: empty tool id in preference token `{token}`")]
    EmptyPreference { line: usize, token: String },

    #[error("line {line}: unexpected token `{token}` after preference token")]
    TrailingToken { line: usize, token: String },

    #[error("line {line}: malformed output line `{text}`")]
    MalformedOutput { line: usize, text: String },
}

/// Structurally invalid problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    #[error("duplicate tool id: {0}")]
    DuplicateTool(String),

    #[error("duplicate sample id: {0}")]
    DuplicateSample(String),

    #[error("sample {sample} prefers unknown tool {tool}")]
    UnknownTool { sample: String, tool: String },

    #[error("sample {sample} lists tool {tool} more than once")]
    RepeatedPreference { sample: String, tool: String },

    #[error("sample {0} has an empty preference list")]
    EmptyPreferences(String),

    #[error("fit score of sample {sample} on tool {tool} overflows")]
    ScoreOverflow { tool: String, sample: String },

    #[error("no tools to place {samples} samples on")]
    NoTools { samples: usize },
}

/// Top-level error for parsing, validating and solving from files.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Instance(#[from] InstanceError),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
