// URL Normalizer
//
// Best-effort parsing of raw input URLs into scheme/host/path/query, and
// re-serialization with every query value rewritten.
//
// Rewriting re-encodes the query string: duplicate keys collapse to one and
// keys come out in lexicographic order. Callers that do not ask for
// substitution must keep using the raw input string instead of
// re-serializing, so the original key order survives.
//
// `parse` is strict; `parse_lenient` also takes the scheme-less lines common
// in recon output (`example.com/?q=1`) for key lookups.
//
// Example:
//   Input:  "https://a.com/?y=2&x=1", replacement "FUZZ"
//   Output: "https://a.com/?x=FUZZ&y=FUZZ"

use std::collections::{BTreeSet, HashSet};
use url::form_urlencoded;
use url::{ParseError, Url};

/// Base that scheme-less input is resolved against to reach its query string.
/// Never shows up in output.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// A successfully parsed URL, alive for one classification call
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    url: Url,
    /// Raw text of a scheme-less input that was resolved against `RELATIVE_BASE`
    relative: Option<String>,
}

impl ParsedUrl {
    /// Parse `raw`, returning `None` for anything malformed (including scheme-less strings)
    pub fn parse(raw: &str) -> Option<Self> {
        Url::parse(raw).ok().map(|url| Self { url, relative: None })
    }

    /// Like `parse`, but also accepts scheme-less references such as
    /// `example.com/?q=1`, `//example.com/?q=1` or `/search?q=1`.
    /// Input containing whitespace is still rejected.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        match Url::parse(raw) {
            Ok(url) => Some(Self { url, relative: None }),
            Err(ParseError::RelativeUrlWithoutBase) if !raw.chars().any(char::is_whitespace) => {
                let url = Url::parse(RELATIVE_BASE).ok()?.join(raw).ok()?;
                Some(Self {
                    url,
                    relative: Some(raw.to_string()),
                })
            }
            Err(_) => None,
        }
    }

    pub fn is_relative(&self) -> bool {
        self.relative.is_some()
    }

    /// Empty for scheme-less input
    pub fn scheme(&self) -> &str {
        match self.relative {
            Some(_) => "",
            None => self.url.scheme(),
        }
    }

    /// Only scheme-relative input (`//host/...`) carries a host of its own
    pub fn host(&self) -> Option<&str> {
        match &self.relative {
            Some(raw) if !raw.starts_with("//") => None,
            _ => self.url.host_str(),
        }
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// The query string without the leading '?', empty if there is none
    pub fn raw_query(&self) -> &str {
        self.url.query().unwrap_or("")
    }

    /// Distinct parameter names in first-occurrence order
    pub fn query_keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.url
            .query_pairs()
            .map(|(key, _)| key.into_owned())
            .filter(|key| seen.insert(key.clone()))
            .collect()
    }

    /// Set every query value to `replacement` and serialize the whole URL.
    /// Scheme-less input keeps its raw text outside the query.
    pub fn rewrite_query_values(&self, replacement: &str) -> String {
        if self.raw_query().is_empty() {
            return match &self.relative {
                Some(raw) => raw.clone(),
                None => self.url.to_string(),
            };
        }

        let keys: BTreeSet<String> = self
            .url
            .query_pairs()
            .map(|(key, _)| key.into_owned())
            .collect();

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for key in &keys {
            serializer.append_pair(key, replacement);
        }
        let encoded = escape_like_query_escape(&serializer.finish());

        if let Some(raw) = &self.relative {
            return splice_query(raw, &encoded);
        }

        let mut rewritten = self.url.clone();
        if encoded.is_empty() {
            rewritten.set_query(None);
        } else {
            rewritten.set_query(Some(&encoded));
        }
        rewritten.to_string()
    }
}

/// Adjust form encoding to the QueryEscape set: `~` stays literal, `*` is escaped.
/// The serializer only emits `%7E` for a literal `~`, since `%` itself becomes `%25`.
fn escape_like_query_escape(encoded: &str) -> String {
    encoded.replace("%7E", "~").replace('*', "%2A")
}

/// Replace the query of raw text `raw` with `encoded`, keeping any fragment
fn splice_query(raw: &str, encoded: &str) -> String {
    let (body, fragment) = match raw.find('#') {
        Some(pos) => raw.split_at(pos),
        None => (raw, ""),
    };
    let base = body.split_once('?').map_or(body, |(base, _)| base);
    if encoded.is_empty() {
        format!("{}{}", base, fragment)
    } else {
        format!("{}?{}{}", base, encoded, fragment)
    }
}
