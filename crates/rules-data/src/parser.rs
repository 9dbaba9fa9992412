use std::io;
use std::path::Path;

use crate::error::{Result, RulesError};
use crate::frontmatter::parse_frontmatter;
use crate::model::Rule;
use crate::scanner::MARKDOWN_EXTENSION;
use crate::transform::transform;

/// Read and parse the rule file at `path`, filed under `category`.
///
/// # Errors
///
/// [`RulesError::NotFound`] if the file does not exist, [`RulesError::Io`] for
/// other read failures, and whatever [`parse_rule`] returns.
pub fn parse_rule_file(path: &Path, category: &str) -> Result<Rule> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => RulesError::NotFound(path.to_path_buf()),
        _ => RulesError::io(path, e),
    })?;

    let slug = slug_from_path(path);
    parse_rule(&content, path, category, &slug)
}

/// Build a [`Rule`] from file text already in memory.
pub fn parse_rule(content: &str, path: &Path, category: &str, slug: &str) -> Result<Rule> {
    let (frontmatter, body) = parse_frontmatter(content, path)?;
    let transformed = transform(&body)?;

    Ok(Rule {
        slug: slug.to_string(),
        category: category.to_string(),
        frontmatter,
        content: body,
        code: transformed.code,
        html_content: transformed.html,
    })
}

fn slug_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(MARKDOWN_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE: &str = r#"---
name: React Hooks
language: typescript
votes: 12
tags:
  - react
  - hooks
---
Always call hooks at the top level.

```typescript
useEffect(() => {}, []);
```
"#;

    #[test]
    fn parse_rule_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("react-hooks.md");
        std::fs::write(&path, RULE).unwrap();

        let rule = parse_rule_file(&path, "frontend").unwrap();
        assert_eq!(rule.slug, "react-hooks");
        assert_eq!(rule.category, "frontend");
        assert_eq!(rule.frontmatter.name, "React Hooks");
        assert_eq!(rule.frontmatter.votes, 12);
        assert_eq!(rule.frontmatter.tags, vec!["react", "hooks"]);
        assert_eq!(rule.code.as_deref(), Some("useEffect(() => {}, []);"));
        assert!(rule.content.starts_with("Always call hooks"));
        assert!(rule.content.contains("```typescript"));
        assert!(rule.html_content.contains("<p>Always call hooks at the top level.</p>"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_rule_file(&dir.path().join("gone.md"), "x").unwrap_err();
        assert!(matches!(err, RulesError::NotFound(_)));
    }

    #[test]
    fn slug_strips_only_markdown_extension() {
        assert_eq!(slug_from_path(Path::new("/r/c/api.v2.md")), "api.v2");
        assert_eq!(slug_from_path(Path::new("/r/c/plain")), "plain");
    }
}
