/// MCP server exposing the rules catalog.
///
/// Tools:
/// - `list_categories`: every category with its rule count
/// - `list_category`: the rules filed under one category
/// - `get_rule`: full content of one rule
/// - `search_rules`: case-insensitive substring search
/// - `list_rule_paths`: every `(category, slug)` pair
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::info;

use rules_data::RuleLibrary;

use crate::api::{
    CategoryInfo, CategoryListResponse, CategoryRulesResponse, GetRuleParams, ListCategoryParams,
    RuleDetailResponse, RulePathInfo, RulePathsResponse, RuleSummary, SearchRulesParams,
    SearchRulesResponse,
};

#[derive(Clone)]
pub struct RulesServer {
    library: Arc<RuleLibrary>,
    tool_router: ToolRouter<RulesServer>,
}

impl RulesServer {
    pub fn new(library: RuleLibrary) -> Self {
        Self {
            library: Arc::new(library),
            tool_router: Self::tool_router(),
        }
    }

    /// Run a blocking library call off the async runtime.
    async fn query<T, F>(&self, f: F) -> Result<T, String>
    where
        F: FnOnce(&RuleLibrary) -> rules_data::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let library = Arc::clone(&self.library);
        tokio::task::spawn_blocking(move || f(library.as_ref()))
            .await
            .map_err(|e| format!("query task failed: {e}"))?
            .map_err(|e| e.to_string())
    }
}

#[tool_router]
impl RulesServer {
    #[tool(description = "List every rule category with the number of rules it contains.")]
    async fn list_categories(&self) -> Result<Json<CategoryListResponse>, String> {
        let categories = self
            .query(|library| library.list_categories())
            .await
            .map_err(|e| format!("list_categories failed: {e}"))?;

        Ok(Json(CategoryListResponse {
            categories: categories.into_iter().map(CategoryInfo::from).collect(),
        }))
    }

    #[tool(description = "List the rules in one category (by category slug, e.g. 'backend'). Returns names, triggers, tags and votes.")]
    async fn list_category(
        &self,
        Parameters(params): Parameters<ListCategoryParams>,
    ) -> Result<Json<CategoryRulesResponse>, String> {
        let slug = params.category.trim().to_string();
        if slug.is_empty() {
            return Err("category must not be empty".to_string());
        }

        let lookup = slug.clone();
        let (categories, rules) = self
            .query(move |library| {
                let categories = library.list_categories()?;
                let rules = library.list_rules_in_category(&lookup)?;
                Ok((categories, rules))
            })
            .await
            .map_err(|e| format!("list_category failed: {e}"))?;

        let available: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
        let category = categories
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .ok_or_else(|| {
                format!(
                    "unknown category: '{slug}'. Available categories: {}",
                    available.join(", ")
                )
            })?;

        Ok(Json(CategoryRulesResponse {
            category: category.into(),
            rules: rules.iter().map(RuleSummary::from).collect(),
        }))
    }

    #[tool(description = "Get the full content of one rule by category slug and rule slug: metadata, raw markdown, rendered HTML and the extracted code sample.")]
    async fn get_rule(
        &self,
        Parameters(params): Parameters<GetRuleParams>,
    ) -> Result<Json<RuleDetailResponse>, String> {
        let category = params.category.trim().to_string();
        let slug = params.slug.trim().to_string();
        if category.is_empty() || slug.is_empty() {
            return Err("category and slug must not be empty".to_string());
        }

        let (c, s) = (category.clone(), slug.clone());
        let rule = self
            .query(move |library| library.get_rule_by_slug(&c, &s))
            .await
            .map_err(|e| format!("get_rule failed: {e}"))?
            .ok_or_else(|| format!("rule not found: {category}/{slug}"))?;

        Ok(Json(rule.into()))
    }

    #[tool(description = "Search rules by case-insensitive substring over name, trigger, tags and content. No ranking; an empty query lists every rule.")]
    async fn search_rules(
        &self,
        Parameters(params): Parameters<SearchRulesParams>,
    ) -> Result<Json<SearchRulesResponse>, String> {
        let query = params.query;

        let lookup = query.clone();
        let rules = self
            .query(move |library| library.search_rules(&lookup))
            .await
            .map_err(|e| format!("search failed: {e}"))?;
        info!(query = %query, hits = rules.len(), "search_rules");

        Ok(Json(SearchRulesResponse {
            query,
            total: rules.len(),
            rules: rules.iter().map(RuleSummary::from).collect(),
        }))
    }

    #[tool(description = "List the (category, slug) pair of every rule, e.g. to generate one page per rule.")]
    async fn list_rule_paths(&self) -> Result<Json<RulePathsResponse>, String> {
        let paths = self
            .query(|library| library.list_rule_paths())
            .await
            .map_err(|e| format!("list_rule_paths failed: {e}"))?;

        Ok(Json(RulePathsResponse {
            paths: paths.into_iter().map(RulePathInfo::from).collect(),
        }))
    }
}

#[tool_handler]
impl ServerHandler for RulesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "rules-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Rules directory MCP server. Use list_categories to browse, list_category \
                 for the rules in one category, get_rule for full content and code, and \
                 search_rules for substring search across every rule. Content is read from \
                 disk on every call."
                    .to_string(),
            ),
        }
    }
}
