// Generic Parameter Matcher
//
// Finds every parameterized URL without looking at any rule:
//   1. parsed, non-empty query string        -> match
//   2. parsed, ';' in the path (matrix params) -> match
//   3. not parseable, raw string has '='      -> match
// Checks short-circuit per URL, so each URL comes out at most once.

use crate::normalizer::ParsedUrl;
use tracing::trace;

/// Why a URL was considered parameterized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterEvidence {
    QueryString,
    MatrixPath,
    RawEquals,
}

/// Classify a single raw URL, `None` if it carries no parameters.
pub fn detect_parameters(raw: &str) -> Option<ParameterEvidence> {
    match ParsedUrl::parse(raw) {
        Some(parsed) => {
            if !parsed.raw_query().is_empty() {
                Some(ParameterEvidence::QueryString)
            } else if parsed.path().contains(';') {
                Some(ParameterEvidence::MatrixPath)
            } else {
                None
            }
        }
        None if raw.contains('=') => Some(ParameterEvidence::RawEquals),
        None => None,
    }
}

/// Every URL in `urls` that carries some kind of parameter, in input order
pub fn match_any_parameters<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    let mut result = Vec::new();

    for raw in urls {
        let raw: &str = raw.as_ref();
        if let Some(evidence) = detect_parameters(raw) {
            trace!(url = raw, ?evidence, "parameterized URL");
            result.push(raw.to_string());
        }
    }

    result
}
