//! Domain types for ddj-toolkit
//!
//! - ToolRecord: one directory entry, validated from the parsed tool list
//! - Catalog: platform and category vocabularies referenced by label
//! - Dataset: everything loaded for one session

pub mod catalog;
pub mod tool;

pub use catalog::{Catalog, CatalogEntry, CategoryCatalog, FIXED_CATEGORIES, PlatformCatalog};
pub use tool::{FeaturedRank, ToolRecord};

/// The data loaded once per session
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub tools: Vec<ToolRecord>,
    pub platforms: PlatformCatalog,
    /// Present only when the page variant loads a category catalog
    pub categories: Option<CategoryCatalog>,
}

impl Dataset {
    pub fn new(tools: Vec<ToolRecord>, platforms: PlatformCatalog) -> Self {
        Self {
            tools,
            platforms,
            categories: None,
        }
    }

    /// Attach a category catalog
    pub fn with_categories(mut self, categories: CategoryCatalog) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Number of records that can appear in a result set
    pub fn active_count(&self) -> usize {
        self.tools.iter().filter(|t| !t.is_disabled).count()
    }
}
