//! Checkbox selection lists
//!
//! A selection list mirrors a catalog as a row of labelled checkboxes. Lists
//! are always derived from the catalog handed to the constructor.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::Catalog;

/// One checkbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: String,
    pub is_checked: bool,
}

impl FilterOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_checked: false,
        }
    }
}

/// Ordered checkboxes for one filter group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionList {
    options: Vec<FilterOption>,
}

impl SelectionList {
    /// One unchecked option per catalog label, in catalog order
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            options: catalog.labels().map(FilterOption::new).collect(),
        }
    }

    /// Return a list with `label` set to `checked`.
    ///
    /// Unknown labels leave the list unchanged.
    pub fn toggle(&self, label: &str, checked: bool) -> Self {
        let options = self
            .options
            .iter()
            .map(|o| {
                if o.label == label {
                    FilterOption {
                        label: o.label.clone(),
                        is_checked: checked,
                    }
                } else {
                    o.clone()
                }
            })
            .collect();
        Self { options }
    }

    /// Labels of the checked options
    pub fn checked_labels(&self) -> BTreeSet<String> {
        self.options
            .iter()
            .filter(|o| o.is_checked)
            .map(|o| o.label.clone())
            .collect()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label)
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_catalog_all_unchecked() {
        let list = SelectionList::from_catalog(&Catalog::from_labels(["Web", "Mac"]));
        assert_eq!(list.len(), 2);
        assert!(list.options().iter().all(|o| !o.is_checked));
        assert!(list.checked_labels().is_empty());
    }

    #[test]
    fn test_toggle_returns_new_list() {
        let list = SelectionList::from_catalog(&Catalog::from_labels(["Web", "Mac"]));
        let checked = list.toggle("Mac", true);
        assert!(list.checked_labels().is_empty());
        assert_eq!(checked.checked_labels().into_iter().collect::<Vec<_>>(), vec!["Mac"]);

        let unchecked = checked.toggle("Mac", false);
        assert!(unchecked.checked_labels().is_empty());
    }

    #[test]
    fn test_toggle_unknown_label_is_noop() {
        let list = SelectionList::from_catalog(&Catalog::from_labels(["Web"]));
        assert_eq!(list.toggle("Amiga", true), list);
    }

    #[test]
    fn test_order_follows_catalog() {
        let list = SelectionList::from_catalog(&Catalog::fixed_categories());
        assert_eq!(list.options()[0].label, "Visualização");
        assert_eq!(list.options()[8].label, "Programação");
    }
}
