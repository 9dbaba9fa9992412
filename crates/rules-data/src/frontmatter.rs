//! Header/body splitting for rule files.
//!
//! A header is a YAML block between two `---` lines at the very top of the file.
//! Files without an opening delimiter have no header; every field takes its
//! default and the whole text is the body.
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, RulesError};
use crate::model::RuleFrontmatter;

const DELIMITER: &str = "---";

/// Header fields as they appear in the file. Every key is optional and may be null.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFrontmatter {
    name: Option<String>,
    trigger: Option<String>,
    language: Option<String>,
    compatibility: Option<String>,
    author: Option<String>,
    votes: Option<i64>,
    tags: Option<Vec<String>>,
    created_at: Option<String>,
    updated_at: Option<String>,
}

impl From<RawFrontmatter> for RuleFrontmatter {
    fn from(raw: RawFrontmatter) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            trigger: raw.trigger.unwrap_or_default(),
            language: raw.language.unwrap_or_default(),
            compatibility: raw.compatibility.unwrap_or_default(),
            author: raw.author.unwrap_or_default(),
            votes: raw.votes.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

enum Split<'a> {
    NoHeader,
    Header { yaml: &'a str, body: &'a str },
    Unterminated,
}

fn split(content: &str) -> Split<'_> {
    let (first, rest) = content.split_once('\n').unwrap_or((content, ""));
    if first.trim_end() != DELIMITER {
        return Split::NoHeader;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Split::Header {
                yaml: &rest[..offset],
                body: &rest[offset + line.len()..],
            };
        }
        offset += line.len();
    }
    Split::Unterminated
}

/// Split raw file text into decoded metadata and the markdown body.
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns [`RulesError::Frontmatter`] if the opening `---` has no matching
/// closing line, or if the header is not valid YAML for the rule schema
/// (for example `votes: many` or `tags: react`).
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(RuleFrontmatter, String)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    match split(content) {
        Split::NoHeader => Ok((RuleFrontmatter::default(), content.to_string())),
        Split::Unterminated => Err(RulesError::frontmatter(
            path,
            "missing closing --- delimiter",
        )),
        Split::Header { yaml, body } => {
            let raw = if yaml.trim().is_empty() {
                RawFrontmatter::default()
            } else {
                serde_yaml::from_str::<RawFrontmatter>(yaml)
                    .map_err(|e| RulesError::frontmatter(path, e.to_string()))?
            };
            Ok((raw.into(), body.to_string()))
        }
    }
}
