use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("{source_name}:{line}: the key field <{field}> not found in data, \
             the record has {fields} field(s)")]
    KeyIndexOutOfRange {
        source_name: String,
        line: usize,
        field: usize,
        fields: usize,
    },

    #[error("invalid value '{value}' for --{option}: the key field must be a 1-based \
             positive number")]
    InvalidKeyArgument { option: &'static str, value: String },

    #[error("the output delimiter must be 1 byte long in utf8, got '{value}'")]
    InvalidDelimiter { value: String },

    #[error("could not read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write output: {0}")]
    Write(#[source] io::Error),
}
