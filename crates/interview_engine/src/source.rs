use std::io;
use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot open {name}: {source}")]
    Open { name: String, source: io::Error },
    #[error("failed reading {name}: {source}")]
    Read { name: String, source: io::Error },
}

/// A selected resume document.
#[async_trait::async_trait]
pub trait ResumeSource: Send + Sync {
    /// Human readable name for logs.
    fn display_name(&self) -> String;

    /// Length in bytes without reading the content. `None` if unknown.
    async fn byte_len(&self) -> Option<u64>;

    /// Reads the whole document. The underlying handle is released before
    /// returning, on success and on error.
    async fn read_all(&self) -> Result<Vec<u8>, SourceError>;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ResumeSource for FileSource {
    fn display_name(&self) -> String {
        self.path.display().to_string()
    }

    async fn byte_len(&self) -> Option<u64> {
        tokio::fs::metadata(&self.path)
            .await
            .ok()
            .filter(|meta| meta.is_file())
            .map(|meta| meta.len())
    }

    async fn read_all(&self) -> Result<Vec<u8>, SourceError> {
        let mut file = tokio::fs::File::open(&self.path)
            .await
            .map_err(|source| SourceError::Open {
                name: self.display_name(),
                source,
            })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .await
            .map_err(|source| SourceError::Read {
                name: self.display_name(),
                source,
            })?;
        Ok(bytes)
    }
}

/// Resume content already held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

#[async_trait::async_trait]
impl ResumeSource for MemorySource {
    fn display_name(&self) -> String {
        self.name.clone()
    }

    async fn byte_len(&self) -> Option<u64> {
        Some(self.bytes.len() as u64)
    }

    async fn read_all(&self) -> Result<Vec<u8>, SourceError> {
        Ok(self.bytes.clone())
    }
}
