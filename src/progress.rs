// src/progress.rs
use crate::store::QuoteRecord;

/// Progress reporting for the scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// A page is about to be read (page numbers start at 1).
    fn page(&mut self, _number: u32, _url: &str) {}

    /// One quote was extracted and written.
    fn record(&mut self, _record: &QuoteRecord) {}

    /// Called once after the last page.
    fn finish(&mut self, _pages: u32, _records: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
