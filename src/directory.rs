//! Directory session
//!
//! Owns the loaded dataset and the selection state for one session. Every
//! interaction replaces the selection state with a new value; results are
//! recomputed from scratch on each call.

use log::{debug, info};

use crate::domain::{Catalog, Dataset, ToolRecord};
use crate::filter::{CategorySource, FilterState, Pipeline, PipelineConfig};
use crate::selection::SelectionList;

/// Selection state of the filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    pub categories: SelectionList,
    pub platforms: SelectionList,
    pub open_source_only: bool,
    pub search: String,
}

impl Selections {
    /// Fresh, all-unchecked selections for the given catalogs
    pub fn derive(config: PipelineConfig, dataset: &Dataset) -> Self {
        let category_catalog = category_vocabulary(config, dataset);
        Self {
            categories: SelectionList::from_catalog(&category_catalog),
            platforms: SelectionList::from_catalog(&dataset.platforms),
            open_source_only: false,
            search: String::new(),
        }
    }

    /// The filter state these selections describe
    pub fn filter_state(&self) -> FilterState {
        FilterState::new()
            .with_categories(self.categories.checked_labels())
            .with_platforms(self.platforms.checked_labels())
            .with_open_source_only(self.open_source_only)
            .with_search(self.search.clone())
    }
}

/// Category labels offered by a page variant.
///
/// Falls back to the fixed list when the variant wants a catalog but none
/// was loaded.
pub fn category_vocabulary(config: PipelineConfig, dataset: &Dataset) -> Catalog {
    match (config.category_source, &dataset.categories) {
        (CategorySource::Catalog, Some(categories)) => categories.clone(),
        _ => Catalog::fixed_categories(),
    }
}

/// One session over a loaded dataset
#[derive(Debug, Clone)]
pub struct Directory {
    dataset: Dataset,
    pipeline: Pipeline,
    selections: Selections,
}

impl Directory {
    pub fn new(dataset: Dataset, config: PipelineConfig) -> Self {
        let selections = Selections::derive(config, &dataset);
        info!(
            "Directory ready: {} tools, {} platforms, {} categories",
            dataset.tools.len(),
            selections.platforms.len(),
            selections.categories.len()
        );
        Self {
            dataset,
            pipeline: Pipeline::new(config),
            selections,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> PipelineConfig {
        self.pipeline.config()
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Set a category checkbox
    pub fn check_category(&mut self, label: &str, checked: bool) {
        self.selections = Selections {
            categories: self.selections.categories.toggle(label, checked),
            ..self.selections.clone()
        };
    }

    /// Set a platform checkbox
    pub fn check_platform(&mut self, label: &str, checked: bool) {
        self.selections = Selections {
            platforms: self.selections.platforms.toggle(label, checked),
            ..self.selections.clone()
        };
    }

    /// Set the open-source-only toggle
    pub fn set_open_source_only(&mut self, only: bool) {
        self.selections = Selections {
            open_source_only: only,
            ..self.selections.clone()
        };
    }

    /// Set the search text
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.selections = Selections {
            search: search.into(),
            ..self.selections.clone()
        };
    }

    /// The filter state of the current selections
    pub fn filter_state(&self) -> FilterState {
        self.selections.filter_state()
    }

    /// True if any filter control narrows the result
    pub fn is_filtered(&self) -> bool {
        !self.filter_state().is_unconstrained()
    }

    /// Ranked results for the current selections
    pub fn results(&self) -> Vec<&ToolRecord> {
        let state = self.filter_state();
        let results = self.pipeline.apply(&self.dataset.tools, &state);
        debug!("Filter {:?} matched {} tools", state, results.len());
        results
    }

    /// Install freshly loaded data.
    ///
    /// Selection lists are rebuilt from the new catalogs, all unchecked.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.selections = Selections::derive(self.pipeline.config(), &dataset);
        self.dataset = dataset;
        info!(
            "Dataset replaced: {} tools, {} platforms",
            self.dataset.tools.len(),
            self.selections.platforms.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Catalog, ToolRecord};

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                ToolRecord::new("R", "Análise")
                    .with_platforms(["Windows", "Linux"])
                    .with_open_source(true),
                ToolRecord::new("Excel", "Análise").with_platforms(["Windows"]),
                ToolRecord::new("Datawrapper", "Visualização")
                    .with_platforms(["Web"])
                    .with_featured(1),
                ToolRecord::new("Old", "Multi").with_platforms(["Web"]).with_disabled(true),
            ],
            Catalog::from_labels(["Windows", "Linux", "Web"]),
        )
    }

    fn names(directory: &Directory) -> Vec<String> {
        directory.results().iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_initial_results_ranked() {
        let directory = Directory::new(dataset(), PipelineConfig::fixed());
        assert_eq!(names(&directory), vec!["Datawrapper", "R", "Excel"]);
    }

    #[test]
    fn test_fixed_variant_uses_fixed_categories() {
        let ds = dataset().with_categories(Catalog::from_labels(["Only"]));
        let directory = Directory::new(ds, PipelineConfig::fixed());
        assert_eq!(directory.selections().categories.len(), 9);
    }

    #[test]
    fn test_catalog_variant_uses_category_catalog() {
        let ds = dataset().with_categories(Catalog::from_labels(["Análise", "Visualização"]));
        let directory = Directory::new(ds, PipelineConfig::catalog_with_search());
        assert_eq!(directory.selections().categories.len(), 2);
    }

    #[test]
    fn test_catalog_variant_without_catalog_falls_back() {
        let directory = Directory::new(dataset(), PipelineConfig::catalog_with_search());
        assert_eq!(directory.selections().categories.len(), 9);
    }

    #[test]
    fn test_checkbox_interactions() {
        let mut directory = Directory::new(dataset(), PipelineConfig::fixed());
        directory.check_platform("Linux", true);
        assert_eq!(names(&directory), vec!["R"]);

        directory.check_platform("Web", true);
        assert_eq!(names(&directory), vec!["Datawrapper", "R"]);

        directory.check_platform("Web", false);
        directory.check_platform("Linux", false);
        directory.check_category("Análise", true);
        directory.set_open_source_only(true);
        assert_eq!(names(&directory), vec!["R"]);
    }

    #[test]
    fn test_search_interaction() {
        let mut directory = Directory::new(dataset(), PipelineConfig::catalog_with_search());
        directory.set_search("excel");
        assert_eq!(names(&directory), vec!["Excel"]);
        directory.set_search("");
        assert_eq!(directory.results().len(), 3);
    }

    #[test]
    fn test_replace_dataset_rebuilds_from_new_catalog() {
        let mut directory = Directory::new(dataset(), PipelineConfig::fixed());
        directory.check_platform("Linux", true);

        let fresh = Dataset::new(
            vec![ToolRecord::new("QGIS", "Cartografia").with_platforms(["Mac"])],
            Catalog::from_labels(["Mac", "Android"]),
        );
        directory.replace_dataset(fresh);

        let labels: Vec<&str> = directory
            .selections()
            .platforms
            .options()
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Mac", "Android"]);
        assert!(directory.filter_state().platforms().is_empty());
        assert_eq!(names(&directory), vec!["QGIS"]);
    }

    #[test]
    fn test_is_filtered() {
        let mut directory = Directory::new(dataset(), PipelineConfig::fixed());
        assert!(!directory.is_filtered());
        directory.set_search("   ");
        assert!(!directory.is_filtered());
        directory.set_open_source_only(true);
        assert!(directory.is_filtered());
    }

    #[test]
    fn test_filter_state_reflects_selections() {
        let mut directory = Directory::new(dataset(), PipelineConfig::fixed());
        directory.check_category("Redes", true);
        directory.set_search("x");
        let state = directory.filter_state();
        assert!(state.categories().contains("Redes"));
        assert_eq!(state.search(), "x");
    }
}
