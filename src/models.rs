// Core data models for paramx
// Rules, URL parts and the fixed tag vocabulary

use serde::Deserialize;
use std::fmt;

/// Every classification tag the tool knows about, in all-tags order.
pub const KNOWN_TAGS: [&str; 8] = ["xss", "sqli", "lfi", "rce", "idor", "ssrf", "ssti", "redirect"];

/// Tag keyword that switches the run into subdomain mode.
pub const SUBDOMAIN_TAG: &str = "isubs";

/// Returns the canonical (lowercase) form of `tag` if it is one of `KNOWN_TAGS`.
pub fn known_tag(tag: &str) -> Option<&'static str> {
    KNOWN_TAGS.iter().copied().find(|t| t.eq_ignore_ascii_case(tag))
}

/// Case-insensitive string equality using Unicode lowercase mapping
pub fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// The URL component a rule's tokens are matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    Query,
    Subdomain,
    Path,
    /// Anything else found in a rule file; loads fine, matches nothing
    #[serde(other)]
    Other,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Query => write!(f, "query"),
            Part::Subdomain => write!(f, "subdomain"),
            Part::Path => write!(f, "path"),
            Part::Other => write!(f, "other"),
        }
    }
}

/// A single rule: a tag, the part it applies to and its match tokens
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub tag: String,
    pub part: Part,
    #[serde(default)]
    pub list: Vec<String>,
}

impl Rule {
    pub fn new(tag: &str, part: Part, list: &[&str]) -> Self {
        Self {
            tag: tag.to_string(),
            part,
            list: list.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True if this rule carries `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        eq_fold(&self.tag, tag)
    }

    /// Checks the invariants every loaded rule must hold.
    /// A blank token would match every key or every URL, so it is refused.
    pub fn validate(&self) -> Result<(), String> {
        if self.tag.trim().is_empty() {
            return Err("rule has an empty tag".to_string());
        }
        if let Some(pos) = self.list.iter().position(|t| t.is_empty()) {
            return Err(format!("rule '{}' has an empty token at index {}", self.tag, pos));
        }
        Ok(())
    }
}

/// Ordered collection of rules shared read-only by every matcher in a run
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Base rules first, custom override rules appended last
    pub fn assemble(base: Vec<Rule>, custom: Option<Vec<Rule>>) -> Self {
        let mut rules = base;
        if let Some(extra) = custom {
            rules.extend(extra);
        }
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Query rules carrying `tag`, in load order
    pub fn query_rules<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules
            .iter()
            .filter(move |r| r.part == Part::Query && r.has_tag(tag))
    }

    /// Subdomain rules regardless of tag
    pub fn subdomain_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|r| r.part == Part::Subdomain)
    }
}

/// Trait for anything that can produce rules (directories, single files, the built-in pack)
pub trait RuleSource {
    fn load(&self) -> crate::error::ParamxResult<Vec<Rule>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tag_is_case_insensitive() {
        assert_eq!(known_tag("XSS"), Some("xss"));
        assert_eq!(known_tag("Redirect"), Some("redirect"));
        assert_eq!(known_tag("foo"), None);
        assert_eq!(known_tag(SUBDOMAIN_TAG), None);
    }

    #[test]
    fn eq_fold_handles_unicode() {
        assert!(eq_fold("Email", "email"));
        assert!(eq_fold("ПОИСК", "поиск"));
        assert!(!eq_fold("id", "ids"));
    }

    #[test]
    fn query_rules_filters_part_and_tag() {
        let set = RuleSet::new(vec![
            Rule::new("XSS", Part::Query, &["q"]),
            Rule::new("xss", Part::Subdomain, &["admin"]),
            Rule::new("sqli", Part::Query, &["id"]),
        ]);
        let xss: Vec<_> = set.query_rules("xss").collect();
        assert_eq!(xss.len(), 1);
        assert_eq!(xss[0].list, vec!["q".to_string()]);
        assert_eq!(set.subdomain_rules().count(), 1);
    }

    #[test]
    fn validate_rejects_blank_tag_and_token() {
        assert!(Rule::new(" ", Part::Query, &["q"]).validate().is_err());
        assert!(Rule::new("xss", Part::Query, &["q", ""]).validate().is_err());
        assert!(Rule::new("xss", Part::Query, &[]).validate().is_ok());
    }

    #[test]
    fn unknown_part_deserializes_as_other() {
        let rule: Rule = serde_yaml::from_str("tag: xss\npart: header\nlist: [x]").unwrap();
        assert_eq!(rule.part, Part::Other);
    }
}
