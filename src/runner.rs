// Run orchestration for paramx
// Turns CLI options into a rule set and a dispatch, and reports the outcome

use crate::dispatcher::{classify, Classification, TagMode};
use crate::error::ParamxResult;
use crate::models::{RuleSet, RuleSource};
use crate::rules::{DirectorySource, EmbeddedRules, TemplateFile};
use std::path::PathBuf;
use tracing::info;

/// Everything a run needs besides the URLs themselves
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory of rule files; the built-in pack is used when unset
    pub templates_path: Option<PathBuf>,
    /// Extra rule file appended after the base rules
    pub custom_template: Option<PathBuf>,
    pub tag: String,
    /// `Some` when substitution was requested, even if the value is empty
    pub replace_with: Option<String>,
    pub all_tags: bool,
    pub all_params: bool,
    pub output_file: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            templates_path: None,
            custom_template: None,
            tag: "xss".to_string(),
            replace_with: None,
            all_tags: false,
            all_params: false,
            output_file: None,
        }
    }
}

impl RunOptions {
    pub fn mode(&self) -> TagMode {
        TagMode::select(&self.tag, self.all_tags, self.all_params)
    }
}

/// Assemble the run's rule set: base source first, custom template last.
pub fn load_rule_set(opts: &RunOptions) -> ParamxResult<RuleSet> {
    let base = match &opts.templates_path {
        Some(dir) => DirectorySource::new(dir).load()?,
        None => EmbeddedRules.load()?,
    };
    let custom = match &opts.custom_template {
        Some(path) => Some(TemplateFile::new(path).load()?),
        None => None,
    };

    let rules = RuleSet::assemble(base, custom);
    info!(rules = rules.len(), "rule set loaded");
    Ok(rules)
}

/// Classify `urls` according to `opts`.
/// Rules are not loaded at all in all-parameters mode.
pub fn run(opts: &RunOptions, urls: &[String]) -> ParamxResult<Classification> {
    let mode = opts.mode();
    let rules = if mode.uses_rules() {
        load_rule_set(opts)?
    } else {
        RuleSet::default()
    };

    info!("Classifying {} URLs for {}", urls.len(), mode);
    let classification = classify(&mode, urls, &rules, opts.replace_with.as_deref())?;
    info!("{}", classification.summary());
    Ok(classification)
}
