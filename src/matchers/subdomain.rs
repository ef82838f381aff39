// Subdomain Matcher
//
// Searches the raw URL string for every token of every Subdomain rule.
// There is no host parsing: a token found in the path matches just as well
// as one found in the host, and tags are not consulted.

use crate::models::RuleSet;
use tracing::trace;

/// Emit each raw URL once per Subdomain token it contains (case-sensitive).
pub fn match_subdomains<S: AsRef<str>>(urls: &[S], rules: &RuleSet) -> Vec<String> {
    let mut result = Vec::new();

    for raw in urls {
        let raw: &str = raw.as_ref();
        for rule in rules.subdomain_rules() {
            for token in &rule.list {
                if raw.contains(token.as_str()) {
                    trace!(url = raw, token = %token, "subdomain token matched");
                    result.push(raw.to_string());
                }
            }
        }
    }

    result
}
