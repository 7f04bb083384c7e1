//! Data sources - fetching and validating the YAML documents
//!
//! The directory is built from three documents: the tool list, the platform
//! catalog and (for one page variant) the category catalog. A `DataSource`
//! returns their raw text; the loader parses and validates them.

mod file;
mod http;
mod loader;

pub use file::FileSource;
pub use http::{DEFAULT_BASE_URL, HttpSource};
pub use loader::{LoadOptions, MalformedPolicy, load_dataset, parse_tools};

use async_trait::async_trait;

use crate::error::Result;

/// The documents a source can provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Tools,
    Platforms,
    Categories,
}

impl Document {
    /// File name under the source's base location
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Tools => "tools.yml",
            Self::Platforms => "platforms.yml",
            Self::Categories => "categories.yml",
        }
    }
}

/// Provides the raw text of a document
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch one document
    async fn fetch(&self, document: Document) -> Result<String>;

    /// Human-readable location, for logs
    fn location(&self) -> String;
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ToolkitError;

    /// In-memory source for tests
    #[derive(Debug, Default)]
    pub struct MockSource {
        documents: HashMap<Document, String>,
    }

    impl MockSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, document: Document, content: &str) -> Self {
            self.documents.insert(document, content.to_string());
            self
        }
    }

    #[async_trait]
    impl DataSource for MockSource {
        async fn fetch(&self, document: Document) -> Result<String> {
            self.documents
                .get(&document)
                .cloned()
                .ok_or_else(|| ToolkitError::Fetch(format!("{} not found", document.file_name())))
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }
}
