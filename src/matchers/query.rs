// Query-Parameter Matcher
//
// Emits a URL once for every (rule, key, token) triple where a query key of
// the URL equals a token of a Query rule carrying the target tag. Both the
// key/token and the tag comparisons ignore case (Unicode case folding).
// Scheme-less lines like `example.com/?q=1` are matched too.
//
// The tag is assumed to be validated already (see dispatcher.rs).
//
// Example:
//   Rule:   { tag: xss, part: query, list: [q, search] }
//   Input:  "https://a.com/?Q=1&page=2"
//   Output: ["https://a.com/?Q=1&page=2"]

use crate::models::{eq_fold, RuleSet};
use crate::normalizer::ParsedUrl;
use tracing::{debug, trace};

/// Match query parameter names of `urls` against the Query rules tagged `tag`.
///
/// `replace_with` of `None` passes matched URLs through byte for byte;
/// `Some(value)` rewrites every query value (including `Some("")`).
pub fn match_query_parameters<S: AsRef<str>>(
    urls: &[S],
    rules: &RuleSet,
    tag: &str,
    replace_with: Option<&str>,
) -> Vec<String> {
    let mut result = Vec::new();

    for raw in urls {
        let raw: &str = raw.as_ref();
        let Some(parsed) = ParsedUrl::parse_lenient(raw) else {
            debug!(url = raw, "skipping unparseable URL");
            continue;
        };

        let keys = parsed.query_keys();
        if keys.is_empty() {
            continue;
        }

        let emitted = match replace_with {
            Some(value) => parsed.rewrite_query_values(value),
            None => raw.to_string(),
        };

        for rule in rules.query_rules(tag) {
            for key in &keys {
                for token in &rule.list {
                    if eq_fold(key, token) {
                        trace!(url = raw, key = %key, tag = %rule.tag, "query parameter matched");
                        result.push(emitted.clone());
                    }
                }
            }
        }
    }

    result
}
