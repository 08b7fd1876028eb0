// src/core/html.rs
// Parsed page plus the two queries the site needs: "find by class" and
// "find the anchor's href". Text is whitespace-normalised on the way out.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::{Error, Result};

pub struct Document {
    url: String,
    html: Html,
}

impl Document {
    pub fn parse(url: &str, body: &str) -> Self {
        Self { url: s!(url), html: Html::parse_document(body) }
    }

    /// Where this page came from (used in diagnostics).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Every element carrying `class`, in document order.
    pub fn all_by_class(&self, class: &str) -> Result<Vec<ElementRef<'_>>> {
        let sel = class_selector(class)?;
        Ok(self.html.select(&sel).collect())
    }

    pub fn find_by_class(&self, class: &str) -> Result<Option<ElementRef<'_>>> {
        let sel = class_selector(class)?;
        Ok(self.html.select(&sel).next())
    }

    /// Text of the first element with `class`; a missing element is an error.
    pub fn text_by_class(&self, class: &str) -> Result<String> {
        match self.find_by_class(class)? {
            Some(el) => Ok(element_text(el)),
            None => Err(self.missing(class)),
        }
    }

    pub fn missing(&self, class: &str) -> Error {
        Error::MissingElement { class: s!(class), url: self.url.clone() }
    }
}

pub fn class_selector(class: &str) -> Result<Selector> {
    selector(&join!(".", class))
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector { css: s!(css), reason: e.to_string() })
}

pub fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of the first descendant of `el` with `class`.
pub fn child_text_by_class(el: ElementRef<'_>, class: &str) -> Result<Option<String>> {
    let sel = class_selector(class)?;
    Ok(el.select(&sel).next().map(element_text))
}

/// `href` of the first `<a>` inside `el`.
pub fn anchor_href(el: ElementRef<'_>) -> Result<Option<String>> {
    let sel = selector("a")?;
    Ok(el.select(&sel).next().and_then(|a| a.value().attr("href")).map(String::from))
}
