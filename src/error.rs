use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a term could not be rolled. These are carried as data inside the
/// outcome and never abort an evaluation.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TermError {
    #[error("multiple die markers")]
    MultipleDieMarkers,
    #[error("{}", fmt_invalid_chars(.0))]
    InvalidCharacters(Vec<char>),
    #[error("invalid number of dice")]
    InvalidDiceCount,
    #[error("invalid die size")]
    InvalidDieSize,
    #[error("too many dice (limit {limit})")]
    TooManyDice { limit: usize },
    #[error("unrecognized input")]
    Unrecognized,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TermErrorKind {
    MultipleDieMarkers,
    InvalidCharacters,
    InvalidDiceCount,
    InvalidDieSize,
    TooManyDice,
    Unrecognized,
}

impl TermError {
    pub fn kind(&self) -> TermErrorKind {
        match self {
            Self::MultipleDieMarkers => TermErrorKind::MultipleDieMarkers,
            Self::InvalidCharacters(_) => TermErrorKind::InvalidCharacters,
            Self::InvalidDiceCount => TermErrorKind::InvalidDiceCount,
            Self::InvalidDieSize => TermErrorKind::InvalidDieSize,
            Self::TooManyDice { .. } => TermErrorKind::TooManyDice,
            Self::Unrecognized => TermErrorKind::Unrecognized,
        }
    }
}

impl fmt::Display for TermErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MultipleDieMarkers => "multiple die markers",
            Self::InvalidCharacters => "invalid character(s)",
            Self::InvalidDiceCount => "invalid number of dice",
            Self::InvalidDieSize => "invalid die size",
            Self::TooManyDice => "too many dice",
            Self::Unrecognized => "unrecognized input",
        };
        f.write_str(s)
    }
}

fn fmt_invalid_chars(chars: &[char]) -> String {
    let listed = chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if chars.len() == 1 {
        format!("invalid character: {}", listed)
    } else {
        format!("invalid characters: {}", listed)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("max_dice = {value} is out of range (1..={limit})")]
    MaxDice { value: usize, limit: usize },
}
