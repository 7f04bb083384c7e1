//! Platform and category catalogs
//!
//! Catalogs define the label vocabulary that tool records reference by name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::Result;

/// Category labels of the page variant that does not load a category catalog
pub const FIXED_CATEGORIES: [&str; 9] = [
    "Visualização",
    "Obtenção",
    "Análise",
    "Cartografia",
    "Publicação",
    "Limpeza",
    "Redes",
    "Multi",
    "Programação",
];

/// One labelled entry of a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Label that tool records use to reference this entry
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    /// Display metadata (icon, color, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// Ordered list of catalog entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// Catalog of platforms (`platforms.yml`)
pub type PlatformCatalog = Catalog;

/// Catalog of categories (`categories.yml`)
pub type CategoryCatalog = Catalog;

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from bare labels
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for label in labels {
            catalog.add(CatalogEntry::new(label));
        }
        catalog
    }

    /// The fixed category list
    pub fn fixed_categories() -> Self {
        Self::from_labels(FIXED_CATEGORIES)
    }

    /// Parse a catalog document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_yaml::from_str(content)?;
        let mut catalog = Self::new();
        for entry in entries {
            catalog.add(entry);
        }
        Ok(catalog)
    }

    /// Add an entry; a repeated label replaces the earlier entry in place
    pub fn add(&mut self, entry: CatalogEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Look up an entry by label
    pub fn get(&self, label: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == label)
    }

    /// Check if a label is defined
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Labels in catalog order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
