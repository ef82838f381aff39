// Custom template loader
// A single rule file supplied by the user, appended after the base rules

use super::{parse_rules, RuleFormat};
use crate::error::{ParamxError, ParamxResult};
use crate::models::{Rule, RuleSource};
use std::path::PathBuf;

pub struct TemplateFile {
    pub path: PathBuf,
}

impl TemplateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RuleSource for TemplateFile {
    fn load(&self) -> ParamxResult<Vec<Rule>> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ParamxError::io(&self.path, e))?;
        // anything that is not .json is read as YAML
        let format = RuleFormat::from_path(&self.path).unwrap_or(RuleFormat::Yaml);
        let rules = parse_rules(&content, format, &self.path)?;
        if rules.is_empty() {
            return Err(ParamxError::RuleParse {
                path: self.path.clone(),
                message: "template contains no rule".to_string(),
            });
        }
        Ok(rules)
    }
}
