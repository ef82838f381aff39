// Built-in rule pack
// The files under rules/ are compiled into the binary and used when no
// templates directory is given.

use super::{parse_rules, RuleFormat};
use crate::error::ParamxResult;
use crate::models::{Rule, RuleSource};
use std::path::Path;

const BUILTIN_RULE_FILES: [(&str, &str); 9] = [
    ("xss.yaml", include_str!("../../rules/xss.yaml")),
    ("sqli.yaml", include_str!("../../rules/sqli.yaml")),
    ("lfi.yaml", include_str!("../../rules/lfi.yaml")),
    ("rce.yaml", include_str!("../../rules/rce.yaml")),
    ("idor.yaml", include_str!("../../rules/idor.yaml")),
    ("ssrf.yaml", include_str!("../../rules/ssrf.yaml")),
    ("ssti.yaml", include_str!("../../rules/ssti.yaml")),
    ("redirect.yaml", include_str!("../../rules/redirect.yaml")),
    ("isubs.yaml", include_str!("../../rules/isubs.yaml")),
];

pub struct EmbeddedRules;

impl RuleSource for EmbeddedRules {
    fn load(&self) -> ParamxResult<Vec<Rule>> {
        let mut rules = Vec::new();
        for (name, content) in BUILTIN_RULE_FILES {
            rules.extend(parse_rules(content, RuleFormat::Yaml, Path::new(name))?);
        }
        Ok(rules)
    }
}
