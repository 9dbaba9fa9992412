/// Tool parameter and response shapes published over MCP.
///
/// Kept separate from `rules_data` model types so the wire schema can evolve
/// without touching the parsing library.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use rules_data::{Category, Rule, RulePath};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListCategoryParams {
    /// Category slug (directory name) such as "backend" or "frontend".
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRuleParams {
    /// Category slug the rule is filed under.
    pub category: String,
    /// Rule slug (file name without `.md`).
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchRulesParams {
    /// Case-insensitive text to look for in names, triggers, tags and content.
    /// Empty returns every rule.
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryInfo {
    pub slug: String,
    pub name: String,
    pub count: usize,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            slug: category.slug,
            name: category.name,
            count: category.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RuleSummary {
    pub category: String,
    pub slug: String,
    pub name: String,
    pub language: String,
    pub trigger: String,
    pub compatibility: String,
    pub author: String,
    pub votes: i64,
    pub tags: Vec<String>,
}

impl From<&Rule> for RuleSummary {
    fn from(rule: &Rule) -> Self {
        let fm = &rule.frontmatter;
        Self {
            category: rule.category.clone(),
            slug: rule.slug.clone(),
            name: fm.name.clone(),
            language: fm.language.clone(),
            trigger: fm.trigger.clone(),
            compatibility: fm.compatibility.clone(),
            author: fm.author.clone(),
            votes: fm.votes,
            tags: fm.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryRulesResponse {
    pub category: CategoryInfo,
    pub rules: Vec<RuleSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleDetailResponse {
    #[serde(flatten)]
    pub summary: RuleSummary,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Raw markdown body with the header stripped
    pub content: String,
    /// First `typescript`/`javascript` code block, trimmed
    pub code: Option<String>,
    /// Rendered body, without the extracted code block
    pub html_content: String,
}

impl From<Rule> for RuleDetailResponse {
    fn from(rule: Rule) -> Self {
        Self {
            summary: RuleSummary::from(&rule),
            created_at: rule.frontmatter.created_at,
            updated_at: rule.frontmatter.updated_at,
            content: rule.content,
            code: rule.code,
            html_content: rule.html_content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchRulesResponse {
    pub query: String,
    pub total: usize,
    pub rules: Vec<RuleSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RulePathInfo {
    pub category: String,
    pub slug: String,
}

impl From<RulePath> for RulePathInfo {
    fn from(path: RulePath) -> Self {
        Self {
            category: path.category,
            slug: path.slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RulePathsResponse {
    pub paths: Vec<RulePathInfo>,
}
