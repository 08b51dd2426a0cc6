//! Search URL construction and term extraction
//!
//! A [`SearchUrl`] is the exact request string issued for a `(term, page)`
//! pair. The application keeps every issued URL in order and derives its
//! search history from them with [`SearchUrl::search_term`], which slices the
//! raw string and so only round-trips plain terms. The request itself is made
//! from [`SearchUrl::query_term`], the term the URL was built with.
//!
//! Shape: `<base>/search?query=<term>&page=<n>`

use crate::DEFAULT_API_BASE;
use std::fmt;

const API_SEARCH: &str = "/search";
const PARAM_SEARCH: &str = "query=";
const PARAM_PAGE: &str = "page=";

/// An issued search request URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchUrl {
    raw: String,
    term: String,
    page: Option<u32>,
}

impl SearchUrl {
    /// Build a URL against the public Hacker News search API
    pub fn new(search_term: &str, page: u32) -> Self {
        Self::with_base(DEFAULT_API_BASE, search_term, page)
    }

    /// Build a URL against a custom API base (e.g. a proxy or a test server)
    pub fn with_base(base: &str, search_term: &str, page: u32) -> Self {
        Self {
            raw: format!("{base}{API_SEARCH}?{PARAM_SEARCH}{search_term}&{PARAM_PAGE}{page}"),
            term: search_term.to_string(),
            page: Some(page),
        }
    }

    /// Wrap an already built URL string, recovering term and page from it
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let term = extract_search_term(&raw).to_string();
        let page = parse_page(&raw);
        Self { raw, term, page }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The term as it appears in the raw URL, used for the history bar
    pub fn search_term(&self) -> &str {
        extract_search_term(&self.raw)
    }

    /// The term the URL was built with, unaffected by `?` or `&` inside it
    pub fn query_term(&self) -> &str {
        &self.term
    }

    /// The page number, if known
    pub fn page(&self) -> Option<u32> {
        self.page
    }

    /// Everything before the query string (`<base>/search`)
    pub fn endpoint(&self) -> &str {
        match self.raw.find('?') {
            Some(idx) => &self.raw[..idx],
            None => &self.raw,
        }
    }
}

impl fmt::Display for SearchUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_page(url: &str) -> Option<u32> {
    let amp = url.rfind('&')?;
    url[amp + 1..].strip_prefix(PARAM_PAGE)?.parse().ok()
}

/// Extract the search term from a URL produced by [`SearchUrl::with_base`].
///
/// Slices between the last `?` and the last `&` and drops the `query=`
/// prefix. This is not a general query-string parser: terms containing `?`
/// or `&` do not survive, and strings without the `?…&` shape yield `""`.
pub fn extract_search_term(url: &str) -> &str {
    let (Some(question), Some(amp)) = (url.rfind('?'), url.rfind('&')) else {
        return "";
    };
    if amp < question {
        return "";
    }
    let segment = &url[question + 1..amp];
    segment.strip_prefix(PARAM_SEARCH).unwrap_or(segment)
}
