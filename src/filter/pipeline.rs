//! Filter/sort pipeline
//!
//! Applies the rules in a fixed order, then ranks the survivors:
//! 1. disabled-exclusion (always)
//! 2. category
//! 3. platform
//! 4. open-source
//! 5. free-text search (only when the page variant enables it)
//!
//! The input slice is never modified; results borrow from it.

use serde::{Deserialize, Serialize};

use crate::domain::ToolRecord;
use crate::filter::rank;
use crate::filter::rules::{
    is_active, matches_category, matches_open_source, matches_platform, matches_search,
    normalize_query,
};
use crate::filter::state::FilterState;

/// Where the category selection vocabulary comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySource {
    /// The built-in category list
    #[default]
    Fixed,
    /// The external category catalog (`categories.yml`)
    Catalog,
}

/// Page variant, fixed at configuration time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub category_source: CategorySource,
    /// Whether the free-text search stage applies
    pub search: bool,
}

impl PipelineConfig {
    /// Variant with the fixed category list and no search
    pub fn fixed() -> Self {
        Self {
            category_source: CategorySource::Fixed,
            search: false,
        }
    }

    /// Variant with the category catalog and search
    pub fn catalog_with_search() -> Self {
        Self {
            category_source: CategorySource::Catalog,
            search: true,
        }
    }
}

/// The filter/sort pipeline for one page variant
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Filter without ranking; survivors keep their input order
    pub fn filter<'a>(&self, tools: &'a [ToolRecord], state: &FilterState) -> Vec<&'a ToolRecord> {
        let query = if self.config.search {
            normalize_query(state.search())
        } else {
            String::new()
        };

        tools
            .iter()
            .filter(|t| is_active(t))
            .filter(|t| matches_category(t, state.categories()))
            .filter(|t| matches_platform(t, state.platforms()))
            .filter(|t| matches_open_source(t, state.open_source_only()))
            .filter(|t| matches_search(t, &query))
            .collect()
    }

    /// Filter, then rank
    pub fn apply<'a>(&self, tools: &'a [ToolRecord], state: &FilterState) -> Vec<&'a ToolRecord> {
        let mut results = self.filter(tools, state);
        rank::rank(&mut results);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_records() -> Vec<ToolRecord> {
        vec![
            ToolRecord::new("first", "Analysis")
                .with_platforms(["Windows"])
                .with_open_source(true)
                .with_featured(1),
            ToolRecord::new("second", "Cleaning")
                .with_platforms(["Web"])
                .with_featured(0),
        ]
    }

    fn names(results: &[&ToolRecord]) -> Vec<String> {
        results.iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_open_source_only_scenario() {
        let tools = two_records();
        let state = FilterState::new().with_open_source_only(true);
        let results = Pipeline::default().apply(&tools, &state);
        assert_eq!(names(&results), vec!["first"]);
    }

    #[test]
    fn test_category_scenario() {
        let tools = two_records();
        let state = FilterState::new().with_category("Cleaning");
        let results = Pipeline::default().apply(&tools, &state);
        assert_eq!(names(&results), vec!["second"]);
    }

    #[test]
    fn test_unconstrained_keeps_all_active() {
        let mut tools = two_records();
        tools.push(ToolRecord::new("gone", "Multi").with_disabled(true));
        let results = Pipeline::default().filter(&tools, &FilterState::new());
        assert_eq!(names(&results), vec!["first", "second"]);
    }

    #[test]
    fn test_disabled_excluded_under_any_state() {
        let tools = vec![
            ToolRecord::new("gone", "Multi")
                .with_platforms(["Web"])
                .with_open_source(true)
                .with_featured(5)
                .with_disabled(true),
        ];
        let states = [
            FilterState::new(),
            FilterState::new().with_category("Multi"),
            FilterState::new().with_platform("Web"),
            FilterState::new().with_open_source_only(true),
            FilterState::new().with_search("gone"),
        ];
        let pipeline = Pipeline::new(PipelineConfig::catalog_with_search());
        for state in &states {
            assert!(pipeline.apply(&tools, state).is_empty());
        }
    }

    #[test]
    fn test_search_ignored_when_variant_disables_it() {
        let tools = two_records();
        let state = FilterState::new().with_search("second");
        let results = Pipeline::new(PipelineConfig::fixed()).apply(&tools, &state);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_applies_when_enabled() {
        let tools = two_records();
        let state = FilterState::new().with_search("SECOND");
        let results = Pipeline::new(PipelineConfig::catalog_with_search()).apply(&tools, &state);
        assert_eq!(names(&results), vec!["second"]);
    }

    #[test]
    fn test_filters_combine_as_and() {
        let tools = two_records();
        let state = FilterState::new()
            .with_category("Cleaning")
            .with_open_source_only(true);
        assert!(Pipeline::default().apply(&tools, &state).is_empty());
    }

    #[test]
    fn test_ranking_orders_featured_then_category() {
        let tools = vec![
            ToolRecord::new("r", "Redes"),
            ToolRecord::new("a", "Análise"),
            ToolRecord::new("top", "Multi").with_featured(1),
        ];
        let results = Pipeline::default().apply(&tools, &FilterState::new());
        assert_eq!(names(&results), vec!["top", "a", "r"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let tools = vec![ToolRecord::new("z", "Redes"), ToolRecord::new("a", "Análise")];
        let before = tools.clone();
        let _ = Pipeline::default().apply(&tools, &FilterState::new());
        assert_eq!(tools, before);
    }

    #[test]
    fn test_config_deserialize() {
        let config: PipelineConfig =
            serde_yaml::from_str("category_source: catalog\nsearch: true").unwrap();
        assert_eq!(config, PipelineConfig::catalog_with_search());
        let config: PipelineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::fixed());
    }
}
