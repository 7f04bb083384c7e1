//! Filter state
//!
//! An immutable value describing the active constraints of every filter
//! group. Updating a constraint yields a new state.

use std::collections::BTreeSet;

/// Active filter values per group.
///
/// An empty set (or empty search string) means the group does not constrain
/// the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    categories: BTreeSet<String>,
    platforms: BTreeSet<String>,
    open_source_only: bool,
    search: String,
}

impl FilterState {
    /// State with no active constraint
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active category set
    pub fn with_categories<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Add one category to the active set
    pub fn with_category(mut self, label: impl Into<String>) -> Self {
        self.categories.insert(label.into());
        self
    }

    /// Replace the active platform set
    pub fn with_platforms<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Add one platform to the active set
    pub fn with_platform(mut self, label: impl Into<String>) -> Self {
        self.platforms.insert(label.into());
        self
    }

    /// Set the open-source-only toggle
    pub fn with_open_source_only(mut self, only: bool) -> Self {
        self.open_source_only = only;
        self
    }

    /// Set the free-text search string
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn platforms(&self) -> &BTreeSet<String> {
        &self.platforms
    }

    pub fn open_source_only(&self) -> bool {
        self.open_source_only
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// True if no group constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.categories.is_empty()
            && self.platforms.is_empty()
            && !self.open_source_only
            && self.search.trim().is_empty()
    }
}
