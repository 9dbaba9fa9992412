//! Query layer over a rules root directory.
//!
//! Every call re-reads the filesystem; nothing is cached between calls.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, RulesError};
use crate::model::{Category, Rule, RulePath};
use crate::parser::parse_rule_file;
use crate::scanner::{list_category_slugs, list_markdown_files, MARKDOWN_EXTENSION};
use crate::search::filter_rules;

#[derive(Debug, Clone)]
pub struct RuleLibrary {
    root: PathBuf,
}

impl RuleLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every category with its current markdown file count.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = list_category_slugs(&self.root)?
            .into_iter()
            .map(|slug| -> Result<Category> {
                let count = list_markdown_files(&self.root, &slug)?.len();
                Ok(Category::new(slug, count))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(root = %self.root.display(), count = categories.len(), "listed categories");
        Ok(categories)
    }

    /// Every rule in one category. An unknown category yields an empty list.
    ///
    /// # Errors
    ///
    /// A single unreadable or malformed file fails the whole listing.
    pub fn list_rules_in_category(&self, category: &str) -> Result<Vec<Rule>> {
        if !is_path_segment(category) || category.starts_with('.') {
            debug!(category, "rejecting category that is not a plain directory name");
            return Ok(Vec::new());
        }

        let rules = list_markdown_files(&self.root, category)?
            .iter()
            .map(|path| parse_rule_file(path, category))
            .collect::<Result<Vec<_>>>()?;

        debug!(category, count = rules.len(), "listed rules");
        Ok(rules)
    }

    /// Look up `<root>/<category>/<slug>.md`. A missing file is `Ok(None)`.
    pub fn get_rule_by_slug(&self, category: &str, slug: &str) -> Result<Option<Rule>> {
        if !is_path_segment(category) || category.starts_with('.') || !is_path_segment(slug) {
            debug!(category, slug, "rejecting lookup outside the rules root");
            return Ok(None);
        }

        let path = self
            .root
            .join(category)
            .join(format!("{slug}{MARKDOWN_EXTENSION}"));

        match parse_rule_file(&path, category) {
            Ok(rule) => Ok(Some(rule)),
            Err(RulesError::NotFound(_)) => {
                debug!(category, slug, "rule not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Every rule in every category, in category then file enumeration order.
    pub fn all_rules(&self) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        for category in list_category_slugs(&self.root)? {
            rules.extend(self.list_rules_in_category(&category)?);
        }
        Ok(rules)
    }

    /// Case-insensitive substring search over name, trigger, tags and content.
    /// An empty query returns every rule.
    pub fn search_rules(&self, query: &str) -> Result<Vec<Rule>> {
        let rules = filter_rules(self.all_rules()?, query);
        debug!(query, count = rules.len(), "searched rules");
        Ok(rules)
    }

    /// `(category, slug)` for every rule file, without parsing any of them.
    pub fn list_rule_paths(&self) -> Result<Vec<RulePath>> {
        let mut paths = Vec::new();
        for category in list_category_slugs(&self.root)? {
            for file in list_markdown_files(&self.root, &category)? {
                let Some(slug) = file
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(|n| n.strip_suffix(MARKDOWN_EXTENSION))
                else {
                    continue;
                };
                paths.push(RulePath {
                    category: category.clone(),
                    slug: slug.to_string(),
                });
            }
        }
        Ok(paths)
    }
}

fn is_path_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
