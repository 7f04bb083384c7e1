//! Dataset loading and record validation

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::domain::{Catalog, Dataset, ToolRecord};
use crate::error::{Result, ToolkitError};

use super::{DataSource, Document};

/// What to do with a tool entry that fails validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Drop the entry and log a warning
    #[default]
    Skip,
    /// Abort loading with the error
    Fail,
}

/// Options for [`load_dataset`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub on_malformed: MalformedPolicy,
    /// Fetch `categories.yml` as well
    pub load_categories: bool,
}

/// Parse and validate the tool list document
pub fn parse_tools(content: &str, policy: MalformedPolicy) -> Result<Vec<ToolRecord>> {
    let document: Value = serde_yaml::from_str(content)?;

    let entries = match document {
        Value::Sequence(entries) => entries,
        Value::Null => Vec::new(),
        _ => {
            return Err(ToolkitError::InvalidDocument(
                Document::Tools.file_name().to_string(),
                "expected a list of tools".to_string(),
            ));
        }
    };

    let mut tools = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match ToolRecord::from_yaml_value(index, entry) {
            Ok(tool) => tools.push(tool),
            Err(e) => match policy {
                MalformedPolicy::Skip => warn!("Skipping tool entry: {}", e),
                MalformedPolicy::Fail => return Err(e),
            },
        }
    }

    Ok(tools)
}

fn parse_catalog(document: Document, content: &str) -> Result<Catalog> {
    Catalog::from_yaml(content).map_err(|e| match e {
        ToolkitError::Parse(inner) => {
            ToolkitError::InvalidDocument(document.file_name().to_string(), inner.to_string())
        }
        other => other,
    })
}

/// Fetch and validate every document the page variant needs
pub async fn load_dataset(source: &dyn DataSource, options: LoadOptions) -> Result<Dataset> {
    info!("Loading dataset from {}", source.location());

    let tools_content = source.fetch(Document::Tools).await?;
    let tools = parse_tools(&tools_content, options.on_malformed)?;

    let platforms_content = source.fetch(Document::Platforms).await?;
    let platforms = parse_catalog(Document::Platforms, &platforms_content)?;

    let mut dataset = Dataset::new(tools, platforms);

    if options.load_categories {
        let categories_content = source.fetch(Document::Categories).await?;
        let categories = parse_catalog(Document::Categories, &categories_content)?;
        dataset = dataset.with_categories(categories);
    }

    info!(
        "Loaded {} tools ({} active) and {} platforms",
        dataset.tools.len(),
        dataset.active_count(),
        dataset.platforms.len()
    );
    Ok(dataset)
}
