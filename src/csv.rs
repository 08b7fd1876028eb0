// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal delimited-text parser (quotes + CRLF tolerant).
/// Quoted fields may hold the separator, doubled quotes and line breaks.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline (or with unterminated quotes).
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Position of each wanted header in `header_row`, matched exactly.
pub fn header_positions(header_row: &[String], wanted: &[&str]) -> Result<Vec<usize>, String> {
    wanted
        .iter()
        .map(|name| {
            header_row
                .iter()
                .position(|h| h.trim() == *name)
                .ok_or_else(|| format!("missing column `{name}`"))
        })
        .collect()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_delimiters_survive_write_then_parse() {
        let row = ["Mark Twain", "“Well, \"that\" is\nodd.”", "http://x/author/Mark-Twain"];
        let mut buf = Vec::new();
        write_row(&mut buf, &row, ',').unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Mark Twain,\"“Well, \"\"that\"\" is\nodd.”\","));

        let parsed = parse_rows(&text, ',');
        assert_eq!(parsed, vec![row.map(String::from).to_vec()]);
    }

    #[test]
    fn crlf_and_blank_lines_are_tolerated() {
        let parsed = parse_rows("a,b\r\n\r\nc,d", ',');
        assert_eq!(parsed, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn header_positions_any_order() {
        let header: Vec<String> = ["Link to Bio", "Name", "Quote"].map(String::from).to_vec();
        assert_eq!(header_positions(&header, &["Name", "Quote", "Link to Bio"]).unwrap(), vec![1, 2, 0]);

        let err = header_positions(&header[..2], &["Quote"]).unwrap_err();
        assert!(err.contains("Quote"));
    }
}
