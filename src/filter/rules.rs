//! Filter rules
//!
//! Each rule is a pure predicate over one tool record. An empty constraint
//! passes every record.

use std::collections::BTreeSet;

use crate::domain::ToolRecord;

/// Disabled records are always dropped
pub fn is_active(tool: &ToolRecord) -> bool {
    !tool.is_disabled
}

/// Keep records whose category is in the active set
pub fn matches_category(tool: &ToolRecord, active: &BTreeSet<String>) -> bool {
    active.is_empty() || active.contains(&tool.category)
}

/// Keep records sharing at least one platform with the active set
pub fn matches_platform(tool: &ToolRecord, active: &BTreeSet<String>) -> bool {
    active.is_empty() || tool.platforms.iter().any(|p| active.contains(p))
}

/// Keep open-source records when the toggle is on
pub fn matches_open_source(tool: &ToolRecord, only_open_source: bool) -> bool {
    !only_open_source || tool.is_open_source
}

/// Normalize a search string for [`matches_search`]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Keep records whose field text contains the normalized query
pub fn matches_search(tool: &ToolRecord, normalized_query: &str) -> bool {
    normalized_query.is_empty() || tool.search_text().contains(normalized_query)
}
