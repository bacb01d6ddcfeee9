use crate::loader::LoaderTrait;
use crate::loader::error::LoadingError;
use crate::loader::file::{File, FileMetadata};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Clone, Debug)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Loader rooted at the parent of `path`, plus the file name to request from it.
    pub fn for_file(path: &Path) -> Result<(Self, PathBuf), LoadingError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| LoadingError::InvalidPath(path.to_path_buf()))?;
        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok((Self::new(base), PathBuf::from(file_name)))
    }

    fn sub_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.base_path.clone();
        }
        self.base_path.join(path)
    }
}

impl LoaderTrait for FileSystemLoader {
    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "Loading file");
        let data = fs::read(&path).await?;
        let last_modified = get_last_modified(&path).await?;
        let metadata = FileMetadata {
            key: path.to_string_lossy().into(),
            last_modified: Some(last_modified),
        };
        Ok(File::new(metadata, data))
    }
}

async fn get_last_modified<P: AsRef<Path>>(path: P) -> Result<DateTime<Utc>, LoadingError> {
    let modified = fs::metadata(path).await?.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapter.txt");
        std::fs::write(&path, "Photosynthesis converts light into chemical energy.").unwrap();

        let (loader, name) = FileSystemLoader::for_file(&path).unwrap();
        let file = loader.load_file(&name).await.unwrap();

        assert_eq!(file.extension().as_deref(), Some("txt"));
        assert!(file.metadata.last_modified.is_some());
        assert_eq!(file.content, b"Photosynthesis converts light into chemical energy.");
    }

    #[test(tokio::test)]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileSystemLoader::new(dir.path().to_path_buf());

        let res = loader.load_file("missing.txt").await;
        assert!(matches!(res, Err(LoadingError::IO(_))));
    }
}
