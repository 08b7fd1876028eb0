// src/store.rs
//! The tabular quote store: one `Name,Quote,Link to Bio` row per quote,
//! written by the scraper and read back as the game's quote pool.

use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::config::consts::{BIO_HEADER, HEADERS, NAME_HEADER, QUOTE_HEADER, STORE_SEP};
use crate::csv::{header_positions, parse_rows, write_row};
use crate::error::{Error, Result};
use crate::file::{open_file, OpenMode};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(rename = "Name")]
    pub author_name: String,
    #[serde(rename = "Quote")]
    pub quote_text: String,
    #[serde(rename = "Link to Bio")]
    pub bio_url: String,
}

impl QuoteRecord {
    pub fn new(author_name: impl Into<String>, quote_text: impl Into<String>, bio_url: impl Into<String>) -> Self {
        Self {
            author_name: author_name.into(),
            quote_text: quote_text.into(),
            bio_url: bio_url.into(),
        }
    }

    fn as_row(&self) -> [&str; 3] {
        [&self.author_name, &self.quote_text, &self.bio_url]
    }
}

/* ---------------- Writing ---------------- */

/// Streaming writer: the header goes out on creation, every record is
/// flushed as soon as it is appended.
pub struct QuoteSink<W: Write> {
    out: BufWriter<W>,
    written: usize,
}

impl<W: Write> QuoteSink<W> {
    pub fn new(inner: W) -> io::Result<Self> {
        let mut out = BufWriter::new(inner);
        write_row(&mut out, &HEADERS, STORE_SEP)?;
        out.flush()?;
        Ok(Self { out, written: 0 })
    }

    pub fn append(&mut self, record: &QuoteRecord) -> io::Result<()> {
        write_row(&mut self.out, &record.as_row(), STORE_SEP)?;
        self.out.flush()?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

impl QuoteSink<File> {
    /// Create (or truncate) the store at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = open_file(path, OpenMode::Write)?;
        Ok(Self::new(file)?)
    }

    /// Flush, then push the bytes to disk before closing.
    pub fn close(self) -> Result<usize> {
        let written = self.written;
        let file = self.finish()?;
        file.sync_all()?;
        Ok(written)
    }
}

/* ---------------- Reading ---------------- */

/// Load the quote pool from `path`. Columns are located by header name.
pub fn load_quotes(path: &Path) -> Result<Vec<QuoteRecord>> {
    let mut text = s!();
    {
        let mut file = open_file(path, OpenMode::Read)?;
        file.read_to_string(&mut text)?;
    }
    let label = path.display().to_string();
    let quotes = parse_quotes(&text, &label)?;
    if quotes.is_empty() {
        return Err(Error::EmptyPool { path: label });
    }
    logf!("Store: loaded {} quotes from {}", quotes.len(), label);
    Ok(quotes)
}

/// Parse store text; `label` only feeds error messages.
pub fn parse_quotes(text: &str, label: &str) -> Result<Vec<QuoteRecord>> {
    let malformed = |row: usize, reason: String| Error::MalformedRecord { path: s!(label), row, reason };

    let mut rows = parse_rows(text, STORE_SEP).into_iter();
    let header = rows.next().ok_or_else(|| malformed(1, s!("missing header row")))?;
    let cols = header_positions(&header, &[NAME_HEADER, QUOTE_HEADER, BIO_HEADER])
        .map_err(|reason| malformed(1, reason))?;

    let mut quotes = Vec::new();
    for (i, row) in rows.enumerate() {
        let row_no = i + 2;
        let field = |col: usize, name: &str| {
            row.get(col).cloned().ok_or_else(|| malformed(row_no, format!("missing `{name}` field")))
        };
        let record = QuoteRecord {
            author_name: field(cols[0], NAME_HEADER)?,
            quote_text: field(cols[1], QUOTE_HEADER)?,
            bio_url: field(cols[2], BIO_HEADER)?,
        };
        if record.author_name.split_whitespace().next().is_none() {
            return Err(malformed(row_no, s!("blank author name")));
        }
        quotes.push(record);
    }
    Ok(quotes)
}
