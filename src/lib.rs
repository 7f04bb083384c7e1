//! ddj-toolkit - A directory of data-journalism tools
//!
//! Loads the tool list and its platform/category catalogs from YAML
//! documents and narrows them with category, platform, open-source and
//! free-text filters, ranking featured tools first.

pub mod directory;
pub mod domain;
pub mod error;
pub mod filter;
pub mod render;
pub mod selection;
pub mod source;

pub use error::{Result, ToolkitError};
