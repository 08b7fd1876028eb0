// src/file.rs

use std::{
    fs::{File, OpenOptions},
    io::{self, ErrorKind},
    path::Path,
};

use regex::Regex;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    /// Create or truncate.
    Write,
}

/// Open `path`, turning every failure into one of the three file errors.
/// Handles are returned to the caller and dropped as soon as it is done.
pub fn open_file(path: &Path, mode: OpenMode) -> Result<File> {
    let opened = match mode {
        OpenMode::Read => File::open(path),
        OpenMode::Write => OpenOptions::new().write(true).create(true).truncate(true).open(path),
    };
    opened.map_err(|e| {
        let err = classify_open_error(path, e);
        loge!("open {} ({mode:?}): {err}", path.display());
        err
    })
}

fn classify_open_error(path: &Path, source: io::Error) -> Error {
    let path = display_name(path);
    match source.kind() {
        ErrorKind::NotFound => Error::FileNotFound { path },
        _ if source.raw_os_error().is_some() => Error::FileOs { path, source },
        _ => Error::FileUnexpected { path, source },
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One or more word characters, a dot, then exactly `ext`.
pub fn is_valid_file_name(ext: &str, name: &str) -> bool {
    let pattern = format!(r"^\w+\.{}$", regex::escape(ext));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(name),
        Err(_) => false,
    }
}
