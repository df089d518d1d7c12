use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("tokenizer error: {0}")]
    Scan(#[from] saphyr_parser::ScanError),

    /// The event stream violated the pull protocol: the tokenizer
    /// yielded nothing, or a value scalar was expected and something
    /// else arrived.
    #[error("protocol error at line {line}: {message}")]
    Protocol { line: usize, message: String },

    #[error("unknown field `{key}` at line {line}")]
    UnknownField { key: String, line: usize },

    #[error("invalid number for `{key}` at line {line}: `{value}`")]
    InvalidNumber {
        key: String,
        value: String,
        line: usize,
    },

    #[error("alias (anchor {anchor}) at line {line}: aliases are not supported")]
    UnsupportedAlias { anchor: usize, line: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
