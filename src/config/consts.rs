// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://quotes.toscrape.com";
pub const USER_AGENT: &str = "who_said_it/0.1";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Scrape
pub const REQUEST_DELAY_MS: u64 = 1_000; // be polite
pub const QUOTE_CLASS: &str = "quote";
pub const AUTHOR_CLASS: &str = "author";
pub const TEXT_CLASS: &str = "text";
pub const NEXT_PAGE_CLASS: &str = "next";

// Author bio page
pub const BORN_DATE_CLASS: &str = "author-born-date";
pub const BORN_LOCATION_CLASS: &str = "author-born-location";
pub const DESCRIPTION_CLASS: &str = "author-description";

// Tabular store
pub const NAME_HEADER: &str = "Name";
pub const QUOTE_HEADER: &str = "Quote";
pub const BIO_HEADER: &str = "Link to Bio";
pub const HEADERS: [&str; 3] = [NAME_HEADER, QUOTE_HEADER, BIO_HEADER];
pub const STORE_SEP: char = ',';
pub const STORE_EXT: &str = "csv";

// Game
pub const MAX_GUESSES: u8 = 5;
pub const SAVE_SIGNAL: &str = "s";
pub const NEW_GAME_SIGNAL: &str = "n";
pub const SAVE_EXT: &str = "json";
pub const REDACTION: &str = "___";

// Logging
pub const DEFAULT_LOG_FILE: &str = "who_said_it.log";
