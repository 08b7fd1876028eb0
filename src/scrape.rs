// src/scrape.rs
use std::{io::Write, path::Path, thread, time::Duration};

use scraper::ElementRef;

use crate::{
    config::consts::{AUTHOR_CLASS, NEXT_PAGE_CLASS, QUOTE_CLASS, TEXT_CLASS},
    config::options::Options,
    core::html::{anchor_href, child_text_by_class},
    core::net::resolve_url,
    core::{Document, Fetch},
    error::{Error, Result},
    progress::Progress,
    store::{QuoteRecord, QuoteSink},
};

/// Where the pagination loop currently stands.
struct ScrapeCursor {
    document: Document,
    page_exists: bool,
    page_number: u32,
}

impl ScrapeCursor {
    fn new(start: Document) -> Self {
        Self { document: start, page_exists: true, page_number: 1 }
    }
}

pub struct Scraper<'a, F: Fetch> {
    fetcher: &'a mut F,
    base_url: &'a str,
    delay: Duration,
}

impl<'a, F: Fetch> Scraper<'a, F> {
    pub fn new(fetcher: &'a mut F, base_url: &'a str, delay: Duration) -> Self {
        Self { fetcher, base_url, delay }
    }

    pub fn from_options(fetcher: &'a mut F, options: &'a Options) -> Self {
        Self::new(fetcher, &options.base_url, options.delay)
    }

    /// Fetch the site root and walk every page from there.
    pub fn scrape_site<W: Write>(
        &mut self,
        sink: &mut QuoteSink<W>,
        progress: &mut dyn Progress,
    ) -> Result<Vec<QuoteRecord>> {
        let start = self.fetcher.fetch(self.base_url)?;
        self.scrape_all(start, sink, progress)
    }

    /// Walk "next" links from `start` until a page has none, appending each
    /// quote to `sink` as soon as it is extracted. Fetch and extraction errors abort the walk;
    /// rows already written stay in the sink.
    pub fn scrape_all<W: Write>(
        &mut self,
        start: Document,
        sink: &mut QuoteSink<W>,
        progress: &mut dyn Progress,
    ) -> Result<Vec<QuoteRecord>> {
        let mut cursor = ScrapeCursor::new(start);
        let mut records = Vec::new();

        while cursor.page_exists {
            progress.page(cursor.page_number, cursor.document.url());

            let mut on_page = 0;
            for item in cursor.document.all_by_class(QUOTE_CLASS)? {
                let record = self.extract_record(&cursor.document, item)?;
                sink.append(&record)?;
                progress.record(&record);
                records.push(record);
                on_page += 1;
            }
            logf!("Scrape: page {} -> {} quotes", cursor.page_number, on_page);

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            self.advance(&mut cursor)?;
        }

        progress.finish(cursor.page_number, records.len());
        Ok(records)
    }

    /// Follow the "next" link if there is one.
    fn advance(&mut self, cursor: &mut ScrapeCursor) -> Result<()> {
        let next_href = match cursor.document.find_by_class(NEXT_PAGE_CLASS)? {
            Some(next) => anchor_href(next)?,
            None => None,
        };

        match next_href {
            Some(href) => {
                let url = resolve_url(self.base_url, &href)?;
                cursor.document = self.fetcher.fetch(&url)?;
                cursor.page_number += 1;
            }
            None => cursor.page_exists = false,
        }
        Ok(())
    }

    fn extract_record(&self, doc: &Document, item: ElementRef<'_>) -> Result<QuoteRecord> {
        let author_name = child_text_by_class(item, AUTHOR_CLASS)?.ok_or_else(|| doc.missing(AUTHOR_CLASS))?;
        let quote_text = child_text_by_class(item, TEXT_CLASS)?.ok_or_else(|| doc.missing(TEXT_CLASS))?;
        let href = anchor_href(item)?.ok_or_else(|| Error::MissingElement {
            class: s!("a[href]"),
            url: s!(doc.url()),
        })?;
        let bio_url = resolve_url(self.base_url, &href)?;
        Ok(QuoteRecord { author_name, quote_text, bio_url })
    }
}

/// Scrape the whole site into a fresh store at `path`.
/// Returns how many quotes were written.
pub fn update_csv<F: Fetch>(
    fetcher: &mut F,
    options: &Options,
    path: &Path,
    progress: &mut dyn Progress,
) -> Result<usize> {
    let mut sink = QuoteSink::create(path)?;
    let scraped = Scraper::from_options(fetcher, options).scrape_site(&mut sink, progress);
    match scraped {
        Ok(_) => {
            let written = sink.close()?;
            logf!("Scrape: wrote {written} quotes to {}", path.display());
            Ok(written)
        }
        Err(e) => {
            loge!("Scrape: aborted after {} quotes: {e}", sink.written());
            let _ = sink.close();
            Err(e)
        }
    }
}
