use crate::model::Rule;

/// Keep the rules matching `query`, preserving their order.
///
/// An empty or whitespace-only query matches everything. Otherwise the query
/// is matched as typed, surrounding spaces included, by a case-insensitive
/// substring test; there is no ranking.
pub fn filter_rules(rules: Vec<Rule>, query: &str) -> Vec<Rule> {
    if query.trim().is_empty() {
        return rules;
    }

    let needle = query.to_lowercase();
    rules.into_iter().filter(|rule| rule.matches(&needle)).collect()
}
