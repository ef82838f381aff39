// Templates directory loader
// Uses walkdir to collect every YAML/JSON rule file below a root directory.
// Any entry walkdir cannot read fails the whole load.

use super::{parse_rules, RuleFormat};
use crate::error::{ParamxError, ParamxResult};
use crate::models::{Rule, RuleSource};
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

pub struct DirectorySource {
    pub root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RuleSource for DirectorySource {
    fn load(&self) -> ParamxResult<Vec<Rule>> {
        if !self.root.is_dir() {
            return Err(ParamxError::io(
                &self.root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "templates directory not found"),
            ));
        }

        let mut rules = Vec::new();
        // symlinked template checkouts are followed; a broken link is a load error
        for entry in WalkDir::new(&self.root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                ParamxError::io(path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(format) = RuleFormat::from_path(entry.path()) else {
                continue;
            };

            let content = std::fs::read_to_string(entry.path())
                .map_err(|e| ParamxError::io(entry.path(), e))?;
            let loaded = parse_rules(&content, format, entry.path())?;
            debug!(path = %entry.path().display(), rules = loaded.len(), "loaded rule file");
            rules.extend(loaded);
        }

        Ok(rules)
    }
}
