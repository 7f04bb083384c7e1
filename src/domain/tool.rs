//! Tool record and featured rank
//!
//! A `ToolRecord` is one entry of the directory. Records are built from the
//! parsed YAML document one at a time so that a bad entry is reported with
//! its position instead of failing the whole list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::{Result, ToolkitError};

/// Primary sort key. Higher ranks are listed first.
///
/// The data source uses either a boolean (`destaque: true`) or a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FeaturedRank(pub i64);

impl FeaturedRank {
    /// Rank of a record that is not featured
    pub const NONE: FeaturedRank = FeaturedRank(0);

    /// Interpret a YAML value as a rank
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::NONE),
            Value::Bool(b) => Some(Self::from(*b)),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.round() as i64))
                .map(FeaturedRank),
            _ => None,
        }
    }

    /// True if the record is promoted at all
    pub fn is_featured(&self) -> bool {
        self.0 > 0
    }
}

impl From<bool> for FeaturedRank {
    fn from(featured: bool) -> Self {
        FeaturedRank(featured as i64)
    }
}

/// YAML representation of a tool entry
#[derive(Debug, Deserialize)]
struct RawTool {
    #[serde(rename = "nome", alias = "name")]
    name: Option<Value>,
    #[serde(rename = "descricao", alias = "description")]
    description: Option<Value>,
    link: Option<Value>,
    #[serde(rename = "categoria", alias = "category")]
    category: Option<String>,
    #[serde(rename = "plataforma", alias = "platforms")]
    platforms: Option<Value>,
    #[serde(rename = "open-source", alias = "open_source")]
    open_source: Option<bool>,
    #[serde(rename = "destaque", alias = "featured")]
    featured: Option<Value>,
    #[serde(rename = "desativado", alias = "disabled")]
    disabled: Option<bool>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// One tool of the directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    pub link: String,
    /// Category label
    #[serde(rename = "categoria")]
    pub category: String,
    /// Platform labels, referencing the platform catalog by name
    #[serde(rename = "plataforma")]
    pub platforms: Vec<String>,
    #[serde(rename = "open-source")]
    pub is_open_source: bool,
    #[serde(rename = "destaque")]
    pub featured: FeaturedRank,
    /// Disabled records never reach a result set
    #[serde(rename = "desativado")]
    pub is_disabled: bool,
    /// Keys the directory does not interpret; still searchable
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ToolRecord {
    /// Create a record with a name and category and no platforms
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            link: String::new(),
            category: category.into(),
            platforms: Vec::new(),
            is_open_source: false,
            featured: FeaturedRank::NONE,
            is_disabled: false,
            extra: BTreeMap::new(),
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Set platform labels
    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = dedup(platforms.into_iter().map(Into::into));
        self
    }

    /// Set open-source flag
    pub fn with_open_source(mut self, open_source: bool) -> Self {
        self.is_open_source = open_source;
        self
    }

    /// Set featured rank
    pub fn with_featured(mut self, rank: i64) -> Self {
        self.featured = FeaturedRank(rank);
        self
    }

    /// Set disabled flag
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    /// Build a record from one element of the parsed tool list.
    ///
    /// `index` is the element's position in the document and is only used
    /// for error reporting.
    pub fn from_yaml_value(index: usize, value: Value) -> Result<Self> {
        if !value.is_mapping() {
            return Err(ToolkitError::malformed(index, "entry is not a mapping"));
        }

        let raw: RawTool = serde_yaml::from_value(value)
            .map_err(|e| ToolkitError::malformed(index, e.to_string()))?;

        let category = raw
            .category
            .ok_or_else(|| ToolkitError::malformed(index, "missing field 'categoria'"))?;

        let platforms = match raw.platforms {
            Some(Value::Sequence(items)) => {
                let mut labels = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(label) => labels.push(label),
                        _ => {
                            return Err(ToolkitError::malformed(
                                index,
                                "field 'plataforma' must contain only labels",
                            ));
                        }
                    }
                }
                dedup(labels)
            }
            Some(Value::String(label)) => vec![label],
            Some(_) => {
                return Err(ToolkitError::malformed(
                    index,
                    "field 'plataforma' must be a list of labels",
                ));
            }
            None => return Err(ToolkitError::malformed(index, "missing field 'plataforma'")),
        };

        let featured = match raw.featured {
            Some(v) => FeaturedRank::from_value(&v).ok_or_else(|| {
                ToolkitError::malformed(index, "field 'destaque' must be a boolean or number")
            })?,
            None => FeaturedRank::NONE,
        };

        Ok(Self {
            name: free_text(raw.name),
            description: free_text(raw.description),
            link: free_text(raw.link),
            category,
            platforms,
            is_open_source: raw.open_source.unwrap_or(false),
            featured,
            is_disabled: raw.disabled.unwrap_or(false),
            extra: raw.extra,
        })
    }

    /// Lowercased text of every textual field value, space separated
    pub fn search_text(&self) -> String {
        let mut parts: Vec<String> = vec![
            self.name.clone(),
            self.description.clone(),
            self.link.clone(),
            self.category.clone(),
        ];
        parts.extend(self.platforms.iter().cloned());
        for value in self.extra.values() {
            collect_text(value, &mut parts);
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ").to_lowercase()
    }

    /// True if the record lists the given platform label
    pub fn has_platform(&self, label: &str) -> bool {
        self.platforms.iter().any(|p| p == label)
    }
}

/// Text of an optional free-text field; scalars of any type are accepted
fn free_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(other) => {
            let mut parts = Vec::new();
            collect_text(&other, &mut parts);
            parts.join(" ")
        }
        None => String::new(),
    }
}

fn collect_text(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Number(n) => out.push(n.to_string()),
        Value::Bool(b) => out.push(b.to_string()),
        Value::Sequence(items) => items.iter().for_each(|v| collect_text(v, out)),
        Value::Mapping(map) => map.values().for_each(|v| collect_text(v, out)),
        Value::Tagged(tagged) => collect_text(&tagged.value, out),
        Value::Null => {}
    }
}

fn dedup(labels: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for label in labels {
        if !out.contains(&label) {
            out.push(label);
        }
    }
    out
}
