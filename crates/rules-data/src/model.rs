use serde::{Deserialize, Serialize};

/// A group of rules backed by one subdirectory of the rules root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, e.g. "Backend" for the `backend` directory
    pub name: String,
    /// Directory name, e.g. "backend"
    pub slug: String,
    /// Number of markdown files in the directory when the listing was taken
    pub count: usize,
}

impl Category {
    pub fn new(slug: impl Into<String>, count: usize) -> Self {
        let slug = slug.into();
        Self {
            name: display_name(&slug),
            slug,
            count,
        }
    }
}

/// Upper-cases the first character of a category slug.
pub fn display_name(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Metadata decoded from a rule file's header. Absent fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleFrontmatter {
    pub name: String,
    pub trigger: String,
    pub language: String,
    pub compatibility: String,
    pub author: String,
    pub votes: i64,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A single rule, mirroring the file at `<root>/<category>/<slug>.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub slug: String,
    pub category: String,
    pub frontmatter: RuleFrontmatter,
    /// Raw markdown body with the header stripped
    pub content: String,
    /// Trimmed contents of the first `typescript`/`javascript` fence
    pub code: Option<String>,
    pub html_content: String,
}

impl Rule {
    /// Case-insensitive substring match over name, trigger, tags and raw content.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        let fm = &self.frontmatter;
        fm.name.to_lowercase().contains(needle)
            || fm.trigger.to_lowercase().contains(needle)
            || fm.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
            || self.content.to_lowercase().contains(needle)
    }
}

/// Identifies one rule page: `<category>/<slug>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulePath {
    pub category: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_capitalizes_first_char() {
        assert_eq!(display_name("backend"), "Backend");
        assert_eq!(display_name("react-native"), "React-native");
        assert_eq!(display_name(""), "");
        assert_eq!(Category::new("frontend", 3).name, "Frontend");
    }

    #[test]
    fn rule_serializes_with_camel_case_fields() {
        let rule = Rule {
            slug: "hooks".to_string(),
            category: "frontend".to_string(),
            frontmatter: RuleFrontmatter {
                created_at: Some("2024-01-01".to_string()),
                ..Default::default()
            },
            content: String::new(),
            code: None,
            html_content: "<p>x</p>".to_string(),
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["htmlContent"], "<p>x</p>");
        assert_eq!(json["frontmatter"]["createdAt"], "2024-01-01");
        assert!(json["frontmatter"].get("updatedAt").is_none());
        assert!(json["code"].is_null());
    }

    #[test]
    fn matches_any_searchable_field() {
        let rule = Rule {
            slug: "s".to_string(),
            category: "c".to_string(),
            frontmatter: RuleFrontmatter {
                name: "Server Components".to_string(),
                trigger: "when writing RSC".to_string(),
                tags: vec!["NextJS".to_string()],
                ..Default::default()
            },
            content: "Prefer streaming.".to_string(),
            code: None,
            html_content: String::new(),
        };
        assert!(rule.matches("server"));
        assert!(rule.matches("rsc"));
        assert!(rule.matches("nextjs"));
        assert!(rule.matches("streaming"));
        assert!(!rule.matches("vue"));
    }
}
