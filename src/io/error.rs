use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("formula is empty")]
    EmptyFormula,

    #[error("no elements found in formula '{0}'")]
    NoElements(String),

    #[error("element '{symbol}' is not supported (at position {position})")]
    UnsupportedElement { symbol: String, position: usize },

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("invalid atom count at position {position}: {details}")]
    InvalidCount { position: usize, details: String },

    #[error("invalid charge suffix: {0}")]
    InvalidCharge(String),
}

impl Error {
    pub fn unsupported_element(symbol: impl Into<String>, position: usize) -> Self {
        Self::UnsupportedElement {
            symbol: symbol.into(),
            position,
        }
    }

    pub fn invalid_count(position: usize, details: impl Into<String>) -> Self {
        Self::InvalidCount {
            position,
            details: details.into(),
        }
    }
}
