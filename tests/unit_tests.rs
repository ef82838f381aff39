/// Unit tests for core paramx modules
/// Tests models, the URL normalizer and the individual matchers
use paramx::matchers::{detect_parameters, match_query_parameters, match_subdomains, ParameterEvidence};
use paramx::models::{known_tag, Part, Rule, RuleSet, KNOWN_TAGS};
use paramx::normalizer::ParsedUrl;

#[test]
fn test_part_display() {
    assert_eq!(Part::Query.to_string(), "query");
    assert_eq!(Part::Subdomain.to_string(), "subdomain");
    assert_eq!(Part::Path.to_string(), "path");
}

#[test]
fn test_known_tags_order() {
    assert_eq!(
        KNOWN_TAGS,
        ["xss", "sqli", "lfi", "rce", "idor", "ssrf", "ssti", "redirect"]
    );
    for tag in KNOWN_TAGS {
        assert_eq!(known_tag(&tag.to_uppercase()), Some(tag));
    }
}

#[test]
fn test_rule_creation() {
    let rule = Rule::new("ssrf", Part::Query, &["url", "dest"]);
    assert_eq!(rule.tag, "ssrf");
    assert_eq!(rule.part, Part::Query);
    assert_eq!(rule.list.len(), 2);
    assert!(rule.has_tag("SSRF"));
}

#[test]
fn test_rule_set_assemble_appends_custom() {
    let set = RuleSet::assemble(
        vec![Rule::new("xss", Part::Query, &["q"])],
        Some(vec![Rule::new("xss", Part::Query, &["custom"])]),
    );
    assert_eq!(set.len(), 2);
    let last = set.iter().last().unwrap();
    assert_eq!(last.list, vec!["custom".to_string()]);
}

#[test]
fn test_substitution_sorts_keys() {
    let parsed = ParsedUrl::parse("https://a.com/?y=2&x=1").unwrap();
    let rewritten = parsed.rewrite_query_values("FUZZ");
    assert!(rewritten.contains("x=FUZZ&y=FUZZ"));
}

#[test]
fn test_substitution_in_order_stays_in_order() {
    let parsed = ParsedUrl::parse("https://a.com/?x=1&y=2").unwrap();
    assert_eq!(parsed.rewrite_query_values("FUZZ"), "https://a.com/?x=FUZZ&y=FUZZ");
}

#[test]
fn test_passthrough_is_byte_for_byte() {
    let rules = RuleSet::new(vec![Rule::new("xss", Part::Query, &["a", "b"])]);
    let raw = "https://a.com/?b=2&a=1";
    let result = match_query_parameters(&[raw], &rules, "xss", None);
    assert!(result.iter().all(|u| u == raw));
    assert_eq!(result.len(), 2);
}

#[test]
fn test_key_token_case_insensitive_both_ways() {
    let upper_token = RuleSet::new(vec![Rule::new("idor", Part::Query, &["EMAIL"])]);
    let lower_token = RuleSet::new(vec![Rule::new("idor", Part::Query, &["email"])]);
    assert_eq!(match_query_parameters(&["https://a.com/?email=1"], &upper_token, "idor", None).len(), 1);
    assert_eq!(match_query_parameters(&["https://a.com/?Email=1"], &lower_token, "idor", None).len(), 1);
}

#[test]
fn test_subdomain_path_false_positive() {
    let rules = RuleSet::new(vec![Rule::new("isubs", Part::Subdomain, &["admin"])]);
    let urls = ["https://admin.example.com", "https://example.com/admin-panel"];
    assert_eq!(match_subdomains(&urls, &rules).len(), 2);
}

#[test]
fn test_generic_precedence() {
    assert_eq!(detect_parameters("https://a.com/path;id=5"), Some(ParameterEvidence::MatrixPath));
    assert_eq!(detect_parameters("https://a.com?x=1"), Some(ParameterEvidence::QueryString));
    assert_eq!(detect_parameters("not a url but has = sign"), Some(ParameterEvidence::RawEquals));
}
