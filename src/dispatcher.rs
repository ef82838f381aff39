// Tag Dispatcher
//
// Picks the matcher(s) for the requested mode, runs them, concatenates their
// output in sub-phase order and removes repeats (first occurrence wins).
//
// Mode precedence when built from CLI flags:
//   isubs tag > --all-tags > --all-params > single tag
//
// Single-tag mode is the only one that validates its tag; an unknown tag is
// rejected before any URL is looked at.

use crate::error::{ParamxError, ParamxResult};
use crate::matchers::{match_any_parameters, match_query_parameters, match_subdomains};
use crate::models::{known_tag, RuleSet, KNOWN_TAGS, SUBDOMAIN_TAG};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// How a run classifies its URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMode {
    SingleTag(String),
    AllTags,
    AllParameters,
    InterestingSubdomains,
}

impl TagMode {
    /// Resolve the mode from the raw flag values.
    pub fn select(tag: &str, all_tags: bool, all_params: bool) -> Self {
        if tag.eq_ignore_ascii_case(SUBDOMAIN_TAG) {
            TagMode::InterestingSubdomains
        } else if all_tags {
            TagMode::AllTags
        } else if all_params {
            TagMode::AllParameters
        } else {
            TagMode::SingleTag(tag.to_string())
        }
    }

    /// Whether this mode reads the rule set at all
    pub fn uses_rules(&self) -> bool {
        !matches!(self, TagMode::AllParameters)
    }
}

impl fmt::Display for TagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagMode::SingleTag(tag) => write!(f, "tag {}", tag),
            TagMode::AllTags => write!(f, "all tags"),
            TagMode::AllParameters => write!(f, "all parameters"),
            TagMode::InterestingSubdomains => write!(f, "interesting subdomains"),
        }
    }
}

/// Deduplicated output of one dispatch
#[derive(Debug, Clone)]
pub struct Classification {
    pub mode: TagMode,
    pub urls: Vec<String>,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Human-facing one-line summary of the result count
    pub fn summary(&self) -> String {
        match &self.mode {
            TagMode::SingleTag(tag) => format!("Found {} parameters with tag {}", self.len(), tag),
            TagMode::AllTags => format!("Found {} parameters across all tags", self.len()),
            TagMode::AllParameters => format!("Found {} parameterized URLs", self.len()),
            TagMode::InterestingSubdomains => {
                format!("Found {} interesting subdomains", self.len())
            }
        }
    }
}

/// Run the matchers `mode` calls for and deduplicate the concatenated result.
pub fn classify<S: AsRef<str>>(
    mode: &TagMode,
    urls: &[S],
    rules: &RuleSet,
    replace_with: Option<&str>,
) -> ParamxResult<Classification> {
    let matched = match mode {
        TagMode::SingleTag(tag) => {
            let tag = known_tag(tag).ok_or_else(|| ParamxError::InvalidTag(tag.clone()))?;
            match_query_parameters(urls, rules, tag, replace_with)
        }
        TagMode::AllTags => {
            let mut all = Vec::new();
            for tag in KNOWN_TAGS {
                let tagged = match_query_parameters(urls, rules, tag, replace_with);
                debug!(tag, matches = tagged.len(), "tag pass finished");
                all.extend(tagged);
            }
            all
        }
        TagMode::AllParameters => match_any_parameters(urls),
        TagMode::InterestingSubdomains => match_subdomains(urls, rules),
    };

    Ok(Classification {
        mode: mode.clone(),
        urls: dedup_preserving_order(matched),
    })
}

/// Drop repeated strings, keeping the first occurrence of each
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Part, Rule};

    #[test]
    fn select_follows_precedence() {
        assert_eq!(TagMode::select("isubs", true, true), TagMode::InterestingSubdomains);
        assert_eq!(TagMode::select("ISUBS", false, false), TagMode::InterestingSubdomains);
        assert_eq!(TagMode::select("xss", true, true), TagMode::AllTags);
        assert_eq!(TagMode::select("xss", false, true), TagMode::AllParameters);
        assert_eq!(
            TagMode::select("sqli", false, false),
            TagMode::SingleTag("sqli".to_string())
        );
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let items = vec!["b", "a", "b", "c", "a"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(dedup_preserving_order(items), vec!["b", "a", "c"]);
    }

    #[test]
    fn invalid_single_tag_is_rejected() {
        let rules = RuleSet::new(vec![Rule::new("foo", Part::Query, &["q"])]);
        let urls = ["https://a.com/?q=1"];
        let err = classify(&TagMode::SingleTag("foo".to_string()), &urls, &rules, None).unwrap_err();
        assert!(matches!(err, ParamxError::InvalidTag(ref t) if t == "foo"));
    }

    #[test]
    fn single_tag_accepts_any_case() {
        let rules = RuleSet::new(vec![Rule::new("xss", Part::Query, &["q"])]);
        let urls = ["https://a.com/?q=1"];
        let result = classify(&TagMode::SingleTag("XSS".to_string()), &urls, &rules, None).unwrap();
        assert_eq!(result.urls, vec!["https://a.com/?q=1"]);
        assert_eq!(result.summary(), "Found 1 parameters with tag XSS");
    }

    #[test]
    fn single_tag_dedups_repeated_matches() {
        let rules = RuleSet::new(vec![
            Rule::new("xss", Part::Query, &["q", "s"]),
            Rule::new("xss", Part::Query, &["q"]),
        ]);
        let urls = ["https://a.com/?q=1&s=2"];
        let result = classify(&TagMode::SingleTag("xss".to_string()), &urls, &rules, None).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let urls: [&str; 0] = [];
        let result = classify(&TagMode::AllTags, &urls, &RuleSet::default(), None).unwrap();
        assert!(result.is_empty());
    }
}
