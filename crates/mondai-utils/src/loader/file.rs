use chrono::{DateTime, Utc};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub key: String,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub metadata: FileMetadata,
    pub content: Vec<u8>,
}

impl File {
    #[must_use]
    pub fn new(metadata: FileMetadata, content: Vec<u8>) -> Self {
        File { metadata, content }
    }

    /// Lowercased extension of the file key, if it has one.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.metadata.key)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
    }

    #[must_use]
    pub fn file_stem(&self) -> Option<&str> {
        Path::new(&self.metadata.key).file_stem().and_then(|stem| stem.to_str())
    }
}

impl FileMetadata {
    #[must_use]
    pub fn new(key: String, last_modified: Option<DateTime<Utc>>) -> Self {
        Self { key, last_modified }
    }
}
