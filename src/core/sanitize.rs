// src/core/sanitize.rs

/// Collapse runs of whitespace (including newlines from the markup) into a
/// single space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_ws;

    #[test]
    fn collapses_markup_whitespace() {
        assert_eq!(normalize_ws("\n        in Ulm,\n   Germany  "), "in Ulm, Germany");
        assert_eq!(normalize_ws(""), "");
    }
}
