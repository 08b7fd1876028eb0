// src/error.rs
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File {path} not found in the current directory.")]
    FileNotFound { path: String },

    #[error("An OS error occurred when trying to open {path}.")]
    FileOs {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("An unexpected error occurred when opening {path}: {source:?}")]
    FileUnexpected {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record in {path} (row {row}): {reason}.")]
    MalformedRecord {
        path: String,
        row: usize,
        reason: String,
    },

    #[error("Save file {path} is malformed: {reason}.")]
    MalformedSave { path: String, reason: String },

    #[error("{path} contains no quotes.")]
    EmptyPool { path: String },

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("cannot resolve url {input}: {reason}")]
    Url { input: String, reason: String },

    #[error("bad selector {css}: {reason}")]
    Selector { css: String, reason: String },

    #[error("no element with class `{class}` on {url}")]
    MissingElement { class: String, url: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Errors that end the session with a printed diagnostic and exit code 1.
    /// Everything else (network, parse) is left to the top-level reporter.
    pub fn is_fatal_file_error(&self) -> bool {
        matches!(
            self,
            Error::FileNotFound { .. }
                | Error::FileOs { .. }
                | Error::FileUnexpected { .. }
                | Error::MalformedRecord { .. }
                | Error::MalformedSave { .. }
                | Error::EmptyPool { .. }
        )
    }
}
