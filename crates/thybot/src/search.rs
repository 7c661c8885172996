//! Live web search through DuckDuckGo's HTML endpoint.
//!
//! The endpoint needs no API key. Results are scraped from the markup with a
//! handful of regular expressions; when DuckDuckGo changes its markup the
//! parser returns fewer (or no) hits rather than failing.
use std::{future::Future, pin::Pin, time::Duration};

use regex::{Captures, Regex};
use thybot_core::{
    error::{Result, ThyBotError},
    generic::SearchHit,
    provider::WebSearchProvider,
};

use crate::error::SearchError;

pub const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("thybot/", env!("CARGO_PKG_VERSION"));
const NO_TITLE: &str = "No title";
const NO_SNIPPET: &str = "No description available.";

pub struct DuckDuckGoSearch {
    http: reqwest::Client,
    endpoint: String,
    parser: ResultParser,
}

impl DuckDuckGoSearch {
    pub fn new() -> std::result::Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(SEARCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Self::with_http(http, DEFAULT_ENDPOINT)
    }

    pub fn with_http(
        http: reqwest::Client,
        endpoint: impl Into<String>,
    ) -> std::result::Result<Self, SearchError> {
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            parser: ResultParser::new()?,
        })
    }

    async fn fetch(
        &self,
        query: &str,
        max_results: usize,
    ) -> std::result::Result<Vec<SearchHit>, SearchError> {
        let url = format!("{}?q={}", self.endpoint, urlencoding::encode(query));
        tracing::debug!(%url, "web search");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.text().await?;
        let hits = self.parser.parse(&body, max_results);
        tracing::info!(hits = hits.len(), "web search finished");
        Ok(hits)
    }
}

impl std::fmt::Debug for DuckDuckGoSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DuckDuckGoSearch")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl WebSearchProvider for DuckDuckGoSearch {
    fn search<'a>(
        &'a self,
        query: &'a str,
        max_results: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SearchHit>>> + Send + 'a>> {
        Box::pin(async move {
            self.fetch(query, max_results)
                .await
                .map_err(ThyBotError::from)
        })
    }
}

/// Scrapes result links and snippets out of a DuckDuckGo HTML page.
#[derive(Debug, Clone)]
struct ResultParser {
    link: Regex,
    snippet: Regex,
    href: Regex,
    tag: Regex,
    entity: Regex,
}

impl ResultParser {
    fn new() -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            link: Regex::new(r#"(?s)<a\b([^>]*\bclass="[^"]*\bresult__a\b[^"]*"[^>]*)>(.*?)</a>"#)?,
            snippet: Regex::new(
                r#"(?s)<(?:a|div|td)\b[^>]*\bclass="[^"]*\bresult__snippet\b[^"]*"[^>]*>(.*?)</(?:a|div|td)>"#,
            )?,
            href: Regex::new(r#"\bhref="([^"]*)""#)?,
            tag: Regex::new(r"<[^>]*>")?,
            entity: Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);")?,
        })
    }

    fn parse(&self, html: &str, max_results: usize) -> Vec<SearchHit> {
        let links: Vec<(usize, usize, String, String)> = self
            .link
            .captures_iter(html)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let href = self.href.captures(caps.get(1)?.as_str())?.get(1)?.as_str();
                let link = self.resolve_link(href)?;
                let title = self.plain_text(caps.get(2).map_or("", |m| m.as_str()));
                Some((whole.start(), whole.end(), link, title))
            })
            .collect();

        let snippets: Vec<(usize, String)> = self
            .snippet
            .captures_iter(html)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some((whole.start(), self.plain_text(caps.get(1)?.as_str())))
            })
            .collect();

        links
            .iter()
            .enumerate()
            .map(|(i, (_, end, link, title))| {
                let next = links.get(i + 1).map_or(html.len(), |l| l.0);
                let snippet = snippets
                    .iter()
                    .find(|(start, _)| start >= end && *start < next)
                    .map(|(_, text)| text.clone())
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| NO_SNIPPET.to_owned());

                SearchHit {
                    title: if title.is_empty() {
                        NO_TITLE.to_owned()
                    } else {
                        title.clone()
                    },
                    snippet,
                    link: link.clone(),
                }
            })
            .take(max_results)
            .collect()
    }

    /// Unwrap DuckDuckGo's `/l/?uddg=` redirect. Ad links are dropped.
    fn resolve_link(&self, href: &str) -> Option<String> {
        let href = self.decode_entities(href);
        if href.contains("duckduckgo.com/y.js") {
            return None;
        }

        if let Some(pos) = href.find("uddg=") {
            let encoded = href[pos + "uddg=".len()..]
                .split('&')
                .next()
                .unwrap_or_default();
            return urlencoding::decode(encoded).ok().map(|s| s.into_owned());
        }

        match href.strip_prefix("//") {
            Some(rest) => Some(format!("https://{rest}")),
            None if href.starts_with("http") => Some(href),
            None => None,
        }
    }

    fn plain_text(&self, fragment: &str) -> String {
        let stripped = self.tag.replace_all(fragment, "");
        let decoded = self.decode_entities(&stripped);
        decoded.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn decode_entities(&self, text: &str) -> String {
        self.entity
            .replace_all(text, |caps: &Captures<'_>| {
                let name = &caps[1];
                let decoded = match name {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some(' '),
                    _ => name
                        .strip_prefix("#x")
                        .or_else(|| name.strip_prefix("#X"))
                        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                        .or_else(|| name.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                        .and_then(char::from_u32),
                };
                decoded.map_or_else(|| caps[0].to_owned(), String::from)
            })
            .into_owned()
    }
}
