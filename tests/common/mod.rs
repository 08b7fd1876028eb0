// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use who_said_it::core::{Document, Fetch};
use who_said_it::store::QuoteRecord;
use who_said_it::{Error, Result};

pub const BASE: &str = "http://quotes.test";
pub const EINSTEIN_BIO: &str = "http://quotes.test/author/Albert-Einstein";

/// In-memory site: URL -> HTML. Every request is recorded; unknown URLs are 404s.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    pub hits: Vec<String>,
}

impl FixtureFetcher {
    pub fn with_page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }

    pub fn hits_for(&self, url: &str) -> usize {
        self.hits.iter().filter(|u| *u == url).count()
    }
}

impl Fetch for FixtureFetcher {
    fn fetch(&mut self, url: &str) -> Result<Document> {
        self.hits.push(url.to_string());
        match self.pages.get(url) {
            Some(html) => Ok(Document::parse(url, html)),
            None => Err(Error::HttpStatus { url: url.to_string(), status: 404 }),
        }
    }
}

pub fn page_url(n: u32) -> String {
    if n == 1 { BASE.to_string() } else { format!("{BASE}/page/{n}/") }
}

fn quote_block(text: &str, author: &str) -> String {
    let slug = author.replace(' ', "-");
    format!(
        r#"<div class="quote" itemscope>
             <span class="text" itemprop="text">{text}</span>
             <span>by <small class="author" itemprop="author">{author}</small>
               <a href="/author/{slug}">(about)</a></span>
           </div>"#
    )
}

/// Page `n` of `total`, with `authors.len()` quotes. Only the last page lacks a "next" link.
pub fn quotes_page(n: u32, total: u32, authors: &[&str]) -> String {
    let quotes: String = authors
        .iter()
        .enumerate()
        .map(|(i, a)| quote_block(&format!("“Quote {n}-{i}, with a comma.”"), a))
        .collect();
    let next = if n < total {
        format!(r#"<li class="next"><a href="/page/{}/">Next <span>→</span></a></li>"#, n + 1)
    } else {
        String::new()
    };
    format!(
        r#"<html><body><div class="col-md-8">{quotes}
           <nav><ul class="pager">{next}</ul></nav></div></body></html>"#
    )
}

pub fn einstein_bio() -> String {
    r#"<html><body><div class="author-details">
         <h3 class="author-title">Albert Einstein</h3>
         <p><strong>Born:</strong> <span class="author-born-date">March 14, 1879</span>
            <span class="author-born-location">in Ulm, Germany</span></p>
         <div class="author-description">
           In 1879, Albert Einstein was born in Ulm. Einstein later moved to Switzerland.
         </div>
       </div></body></html>"#
        .to_string()
}

/// A `total`-page site plus the Einstein bio page.
pub fn site(total: u32, authors: &[&str]) -> FixtureFetcher {
    let mut f = FixtureFetcher::default().with_page(EINSTEIN_BIO, einstein_bio());
    for n in 1..=total {
        f = f.with_page(&page_url(n), quotes_page(n, total, authors));
    }
    f
}

pub fn einstein() -> QuoteRecord {
    QuoteRecord::new(
        "Albert Einstein",
        "“The world as we have created it is a process of our thinking.”",
        EINSTEIN_BIO,
    )
}

pub fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

pub fn path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
