// Rule acquisition for paramx
//
// - directory: every rule file under a templates directory
// - template: a single user-supplied rule file, appended last
// - embedded: the rule pack compiled into the binary
//
// All sources go through `parse_rules`, which accepts YAML (one rule per
// document, several documents per file) or a JSON rule object, and
// validates each rule before handing it out.

pub mod directory;
pub mod embedded;
pub mod template;

pub use directory::DirectorySource;
pub use embedded::EmbeddedRules;
pub use template::TemplateFile;

use crate::error::{ParamxError, ParamxResult};
use crate::models::Rule;
use serde::Deserialize;
use std::path::Path;

/// Rule file formats understood by the loaders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    Yaml,
    Json,
}

impl RuleFormat {
    /// Format for `path` by extension; `None` for files that are not rule files
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(RuleFormat::Yaml),
            "json" => Some(RuleFormat::Json),
            _ => None,
        }
    }
}

/// Parse and validate every rule in `content`; `origin` is only used in errors.
pub fn parse_rules(content: &str, format: RuleFormat, origin: &Path) -> ParamxResult<Vec<Rule>> {
    let parse_err = |message: String| ParamxError::RuleParse {
        path: origin.to_path_buf(),
        message,
    };

    let rules = match format {
        RuleFormat::Json => {
            vec![serde_json::from_str::<Rule>(content).map_err(|e| parse_err(e.to_string()))?]
        }
        RuleFormat::Yaml => {
            let mut rules = Vec::new();
            for document in serde_yaml::Deserializer::from_str(content) {
                let value = serde_yaml::Value::deserialize(document)
                    .map_err(|e| parse_err(e.to_string()))?;
                // blank documents (e.g. a trailing `---`) carry no rule
                if value.is_null() {
                    continue;
                }
                let rule: Rule =
                    serde_yaml::from_value(value).map_err(|e| parse_err(e.to_string()))?;
                rules.push(rule);
            }
            rules
        }
    };

    for rule in &rules {
        rule.validate().map_err(|message| ParamxError::InvalidRule {
            path: origin.to_path_buf(),
            message,
        })?;
    }

    Ok(rules)
}
