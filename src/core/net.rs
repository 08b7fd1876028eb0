// src/core/net.rs
// Blocking HTTP GET and the fetch boundary used by the scraper and the hints.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::core::html::Document;
use crate::error::{Error, Result};

/// Anything that can turn a URL into a parsed page.
/// One request at a time; callers block until it returns.
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> Result<Document>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|source| Error::Http { url: s!(), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&mut self, url: &str) -> Result<Document> {
        logd!("GET {url}");
        let body = http_get(&self.client, url)?;
        Ok(Document::parse(url, &body))
    }
}

/// Perform a GET and return the body.
/// No retries: any transport error or non-2xx status is returned as-is.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let http_err = |source: reqwest::Error| Error::Http { url: s!(url), source };

    let resp = client
        .get(url)
        .header(ACCEPT, "text/html")
        .send()
        .map_err(http_err)?;

    let status = resp.status();
    if !status.is_success() {
        loge!("GET {url} -> {status}");
        return Err(Error::HttpStatus { url: s!(url), status: status.as_u16() });
    }
    resp.text().map_err(http_err)
}

/// Resolve a page-relative `href` against the site root.
pub fn resolve_url(base: &str, href: &str) -> Result<String> {
    let url_err = |reason: String| Error::Url { input: join!(base, " + ", href), reason };
    let root = Url::parse(base).map_err(|e| url_err(e.to_string()))?;
    let joined = root.join(href).map_err(|e| url_err(e.to_string()))?;
    Ok(joined.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_root_relative_hrefs() {
        let url = resolve_url("http://quotes.toscrape.com", "/page/2/").unwrap();
        assert_eq!(url, "http://quotes.toscrape.com/page/2/");

        let bio = resolve_url("http://quotes.toscrape.com/", "/author/Albert-Einstein").unwrap();
        assert_eq!(bio, "http://quotes.toscrape.com/author/Albert-Einstein");
    }

    #[test]
    fn absolute_hrefs_win() {
        let url = resolve_url("http://quotes.toscrape.com", "https://example.org/x").unwrap();
        assert_eq!(url, "https://example.org/x");
    }

    #[test]
    fn bad_base_is_reported() {
        let err = resolve_url("not a url", "/page/2/").unwrap_err();
        assert!(matches!(err, Error::Url { .. }));
    }
}
