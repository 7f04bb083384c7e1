//! Local directory data source

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{Result, ToolkitError};

use super::{DataSource, Document};

/// Reads documents from a directory on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self, document: Document) -> PathBuf {
        self.dir.join(document.file_name())
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self, document: Document) -> Result<String> {
        let path = self.path(document);
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            ToolkitError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}
