use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Document not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only access to the single izahname document on disk.
///
/// The document is read per request rather than cached, so edits to the
/// file show up without a restart.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Stable file:// URI under which the document is published.
    pub fn uri(&self) -> String {
        let absolute = if self.path.is_absolute() {
            self.path.clone()
        } else {
            std::env::current_dir()
                .map(|dir| dir.join(&self.path))
                .unwrap_or_else(|_| self.path.clone())
        };
        format!("file://{}", absolute.display())
    }

    pub async fn read(&self) -> Result<String, DocumentError> {
        fs::read_to_string(&self.path).await.map_err(|e| {
            let path = self.path.display().to_string();
            if e.kind() == std::io::ErrorKind::NotFound {
                DocumentError::NotFound { path }
            } else {
                DocumentError::Io { path, source: e }
            }
        })
    }

    pub async fn health_check(&self) -> Result<(), DocumentError> {
        fs::metadata(&self.path).await.map_err(|e| {
            let path = self.path.display().to_string();
            if e.kind() == std::io::ErrorKind::NotFound {
                DocumentError::NotFound { path }
            } else {
                DocumentError::Io { path, source: e }
            }
        })?;
        Ok(())
    }
}
